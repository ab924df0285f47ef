// ============================================================
// Layer 3 — QaPair Domain Type
// ============================================================
// One row of the FAQ table: a pre-authored question and the
// answer that is returned when a user asks something close to it.
//
// The corpus is an ordered Vec<QaPair>. Position in that Vec is
// the entry's identity: the retrieval index stores one feature
// row per position and returns the answer at the winning one.
//
// Reference: Rust Book §5 (Structs)

use serde::{Deserialize, Serialize};

/// A question/answer pair from the corpus.
///
/// The loader guarantees both fields are non-blank before a pair
/// reaches the retrieval index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaPair {
    /// The pre-authored question, matched against user input
    pub question: String,

    /// The text shown to the user when this entry wins
    pub answer: String,
}

impl QaPair {
    /// Create a new QaPair.
    /// Accepts &str or String for either field.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer:   answer.into(),
        }
    }

    /// True when both fields carry visible text.
    pub fn is_usable(&self) -> bool {
        !self.question.trim().is_empty() && !self.answer.trim().is_empty()
    }
}
