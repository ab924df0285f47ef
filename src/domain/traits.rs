// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer talks to the corpus loader and to the
// retrieval index only through these traits:
//
//   CorpusSource      — CsvCorpusLoader reads the FAQ table;
//                       tests plug in in-memory sources.
//   QuestionAnswerer  — RetrievalIndex answers queries;
//                       tests plug in answerers that fail.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use crate::domain::error::{CorpusLoadError, QueryFailure};
use crate::domain::outcome::QueryOutcome;
use crate::domain::qa_pair::QaPair;

// ─── CorpusSource ─────────────────────────────────────────────────────────────
/// Any component that can produce the question/answer table.
pub trait CorpusSource {
    /// Load every usable entry, in table order.
    /// An empty table is reported as an error, never as Ok(vec![]).
    fn load_all(&self) -> Result<Vec<QaPair>, CorpusLoadError>;

    /// Short human-readable name for log lines.
    fn describe(&self) -> String;
}

// ─── QuestionAnswerer ─────────────────────────────────────────────────────────
/// Any component that can answer a raw user question.
///
/// Implementations must be read-only: answering never changes
/// what a later call returns.
pub trait QuestionAnswerer: Send + Sync {
    fn answer(&self, question: &str) -> Result<QueryOutcome, QueryFailure>;
}
