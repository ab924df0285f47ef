//! Typed errors for the retrieval pipeline.
//!
//! Each enum matches one failure kind and says where it is handled:
//!
//! - [`CorpusLoadError`] is recovered by the fallback corpus.
//! - [`IndexBuildError`] is fatal at startup.
//! - [`NormalizationFailure`] is downgraded to an empty string.
//! - [`QueryFailure`] is turned into the generic apology at the request boundary.

use std::path::PathBuf;

/// The corpus table could not be turned into entries.
#[derive(Debug, thiserror::Error)]
pub enum CorpusLoadError {
    #[error("cannot open corpus file '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("corpus file '{path}' has no '{column}' column")]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("cannot parse corpus file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("corpus file '{path}' contains no usable question/answer rows")]
    Empty { path: PathBuf },
}

/// The index cannot be formed from the given corpus.
#[derive(Debug, thiserror::Error)]
pub enum IndexBuildError {
    #[error("cannot build an index from an empty corpus")]
    NoEntries,

    #[error("none of the {entries} corpus questions produced a usable term")]
    EmptyVocabulary { entries: usize },
}

/// Normalizing one piece of text failed.
#[derive(Debug, thiserror::Error)]
pub enum NormalizationFailure {
    #[error("input of {len} bytes exceeds the {max} byte limit")]
    TooLong { len: usize, max: usize },
}

/// Something went wrong while answering a non-empty query.
#[derive(Debug, thiserror::Error)]
pub enum QueryFailure {
    #[error("feature index {index} is outside the vocabulary of {size} terms")]
    FeatureOutOfRange { index: usize, size: usize },

    #[error("distance to entry {entry} is not a finite number")]
    NonFiniteDistance { entry: usize },

    #[error("the index holds no entries")]
    NoCandidates,

    #[error("nearest entry {entry} has no answer")]
    MissingEntry { entry: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_problem() {
        let err = CorpusLoadError::MissingColumn {
            path:   PathBuf::from("faq.csv"),
            column: "Answer",
        };
        assert_eq!(err.to_string(), "corpus file 'faq.csv' has no 'Answer' column");

        let err = IndexBuildError::EmptyVocabulary { entries: 3 };
        assert!(err.to_string().contains("3 corpus questions"));
    }
}
