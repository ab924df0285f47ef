// ============================================================
// Layer 5 — Retrieval Index
// ============================================================
// The whole retrieval pipeline behind one type:
//
//   build:  corpus questions ─► Preprocessor ─► TfidfVectorizer
//                                              ─► NearestNeighbor
//
//   query:  user text ─► Preprocessor ─► (empty? → NoMatch)
//                     ─► TfidfVectorizer::transform
//                     ─► NearestNeighbor::nearest ─► answer
//
// Built once at startup and never mutated afterwards, so a single
// instance can be shared behind an Arc by every request handler
// without locking.
//
// There is no similarity threshold: any non-empty query gets the
// nearest entry's answer, even when it shares no words with it.

use crate::data::preprocessor::Preprocessor;
use crate::domain::error::{IndexBuildError, QueryFailure};
use crate::domain::outcome::{NoMatchReason, QueryOutcome};
use crate::domain::qa_pair::QaPair;
use crate::domain::traits::QuestionAnswerer;
use crate::ml::model::NearestNeighbor;
use crate::ml::vectorizer::TfidfVectorizer;

pub struct RetrievalIndex {
    preprocessor: Preprocessor,

    /// Corpus entries; position is identity
    entries: Vec<QaPair>,

    /// normalized[i] is the normalized form of entries[i].question
    normalized: Vec<String>,

    vectorizer: TfidfVectorizer,
    model:      NearestNeighbor,
}

impl RetrievalIndex {
    /// Build the index from a non-empty corpus.
    ///
    /// Fails when the corpus is empty or when no question yields a
    /// usable term after normalization.
    pub fn build(entries: Vec<QaPair>, preprocessor: Preprocessor) -> Result<Self, IndexBuildError> {
        if entries.is_empty() {
            return Err(IndexBuildError::NoEntries);
        }

        let normalized: Vec<String> = entries
            .iter()
            .map(|e| preprocessor.normalize(e.question.as_str()))
            .collect();

        let (vectorizer, rows) = TfidfVectorizer::fit_transform(&normalized)?;
        let model = NearestNeighbor::fit(rows, vectorizer.vocabulary_size());

        tracing::info!(
            "Retrieval index built: {} entries, {} terms",
            entries.len(),
            vectorizer.vocabulary_size()
        );

        Ok(Self { preprocessor, entries, normalized, vectorizer, model })
    }

    /// Answer a raw user question with the nearest entry's answer.
    pub fn query(&self, text: &str) -> Result<QueryOutcome, QueryFailure> {
        let normalized = self.preprocessor.normalize(text);
        if normalized.is_empty() {
            return Ok(QueryOutcome::NoMatch(NoMatchReason::EmptyQuery));
        }

        let vector = self.vectorizer.transform(&normalized);
        if vector.is_zero() {
            tracing::debug!("Query '{}' shares no terms with the corpus", normalized);
        }
        let neighbor = self.model.nearest(&vector)?;
        let entry = self
            .entries
            .get(neighbor.index)
            .ok_or(QueryFailure::MissingEntry { entry: neighbor.index })?;

        tracing::debug!(
            "Query '{}' matched entry {} ('{}') at distance {:.4}",
            normalized,
            neighbor.index,
            self.normalized[neighbor.index],
            neighbor.distance
        );

        Ok(QueryOutcome::Answer(entry.answer.clone()))
    }

    /// Number of corpus entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vectorizer.vocabulary_size()
    }
}

impl QuestionAnswerer for RetrievalIndex {
    fn answer(&self, question: &str) -> Result<QueryOutcome, QueryFailure> {
        self.query(question)
    }
}
