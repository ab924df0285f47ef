// ============================================================
// Layer 4 — Text Preprocessor (Normalizer)
// ============================================================
// Turns raw text into the canonical form used for matching.
// The same function runs over every corpus question at build
// time and over every user query, so both sides agree.
//
// Steps (applied in order):
//   1. Lower-case the text
//   2. Split into word tokens: maximal runs of alphanumeric
//      characters or '_'. Punctuation and whitespace separate
//      tokens and never become tokens themselves.
//   3. Lemmatize each token ("policies" → "policy")
//   4. Join the tokens with single spaces, in original order
//
// Example:
//   "What's your RETURN policies?"  →  "what s your return policy"
//
// Normalization never fails from the caller's point of view:
// missing input and inputs that fail internally both become "".
//
// Reference: Rust Book §8 (Strings in Rust)
//            Rust Book §13 (Iterators)

use crate::data::lemmatizer::Lemmatizer;
use crate::domain::error::NormalizationFailure;

/// Upper bound on the size of one input, in bytes.
pub const MAX_INPUT_BYTES: usize = 64 * 1024;

pub struct Preprocessor {
    lemmatizer: Lemmatizer,
}

impl Preprocessor {
    /// Create a Preprocessor around a loaded lemmatizer.
    pub fn new(lemmatizer: Lemmatizer) -> Self {
        Self { lemmatizer }
    }

    /// Normalize text for matching.
    ///
    /// Accepts `&str` or `Option<&str>`; `None` yields the empty string.
    /// Any internal failure is logged and also yields the empty string.
    pub fn normalize<'a>(&self, text: impl Into<Option<&'a str>>) -> String {
        let Some(text) = text.into() else {
            return String::new();
        };

        match self.try_normalize(text) {
            Ok(normalized) => normalized,
            Err(e) => {
                tracing::debug!("Normalization failed, treating input as empty: {e}");
                String::new()
            }
        }
    }

    /// The fallible core of [`normalize`](Self::normalize).
    pub fn try_normalize(&self, text: &str) -> Result<String, NormalizationFailure> {
        if text.len() > MAX_INPUT_BYTES {
            return Err(NormalizationFailure::TooLong {
                len: text.len(),
                max: MAX_INPUT_BYTES,
            });
        }

        let lowered = text.to_lowercase();
        let lemmas: Vec<_> = tokenize(&lowered)
            .map(|token| self.lemmatizer.lemmatize(token))
            .collect();

        Ok(lemmas.join(" "))
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Split text into word tokens, borrowing from the input.
fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !is_word_char(c))
        .filter(|token| !token.is_empty())
}
