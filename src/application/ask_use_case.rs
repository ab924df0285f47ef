// ============================================================
// Layer 2 — Ask Use Case
// ============================================================
// The single entry point every presentation shell calls:
//
//   handle(question) -> Reply
//
//   answerer says Answer(a)  → Reply::Exchange { question, a }
//   answerer says NoMatch    → Reply::Invalid
//   answerer returns Err     → Reply::Failure (logged for operators)
//
// handle() never fails and holds no per-user state, so one
// AskUseCase behind an Arc serves every request concurrently.

use serde::Serialize;
use std::sync::Arc;

use crate::domain::outcome::{QueryOutcome, Reply};
use crate::domain::traits::QuestionAnswerer;
use crate::infra::metrics::{MetricsSnapshot, QueryMetrics};

/// Where the served corpus came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "source", rename_all = "snake_case")]
pub enum CorpusOrigin {
    /// Loaded from the named source (usually a file path)
    Source(String),

    /// The built-in table, after the source failed to load
    Fallback,
}

/// What is being served, for logs and the stats endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorpusSummary {
    pub entries: usize,
    pub origin:  CorpusOrigin,
}

pub struct AskUseCase {
    answerer: Arc<dyn QuestionAnswerer>,
    corpus:   CorpusSummary,
    metrics:  QueryMetrics,
}

impl AskUseCase {
    pub fn new(answerer: Arc<dyn QuestionAnswerer>, corpus: CorpusSummary) -> Self {
        Self {
            answerer,
            corpus,
            metrics: QueryMetrics::new(),
        }
    }

    /// Answer one raw user question.
    pub fn handle(&self, question: &str) -> Reply {
        match self.answerer.answer(question) {
            Ok(QueryOutcome::Answer(answer)) => {
                self.metrics.record_answered();
                Reply::Exchange {
                    question: question.to_string(),
                    answer,
                }
            }
            Ok(QueryOutcome::NoMatch(reason)) => {
                tracing::debug!("No match for question: {reason}");
                self.metrics.record_invalid();
                Reply::Invalid
            }
            Err(e) => {
                tracing::error!("Error processing question: {e}");
                self.metrics.record_failed();
                Reply::Failure
            }
        }
    }

    pub fn corpus(&self) -> &CorpusSummary {
        &self.corpus
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}
