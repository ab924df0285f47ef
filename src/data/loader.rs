// ============================================================
// Layer 4 — Corpus Loader
// ============================================================
// Reads the question/answer table from a CSV file with a header
// row, using the csv crate.
//
// Rules:
//   - The header must name a "Question" and an "Answer" column
//     (exact spelling). Any other columns are ignored.
//   - Rows may be ragged; a row too short to reach one of the
//     two columns counts as missing that value.
//   - Rows whose question or answer is empty or whitespace-only
//     are dropped.
//   - A file with no usable rows is an error, so the caller can
//     switch to the fallback corpus.
//
// Example file:
//   Question,Answer
//   What is your return policy?,30 days money back guarantee
//   "Do you ship abroad?","Yes, to most countries"
//
// Reference: csv crate documentation
//            Rust Book §9 (Error Handling)

use std::path::{Path, PathBuf};

use crate::domain::error::CorpusLoadError;
use crate::domain::qa_pair::QaPair;
use crate::domain::traits::CorpusSource;

pub const QUESTION_COLUMN: &str = "Question";
pub const ANSWER_COLUMN: &str = "Answer";

/// Loads the corpus from a CSV file.
/// Implements the CorpusSource trait from Layer 3.
pub struct CsvCorpusLoader {
    path: PathBuf,
}

impl CsvCorpusLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CorpusSource for CsvCorpusLoader {
    fn load_all(&self) -> Result<Vec<QaPair>, CorpusLoadError> {
        let path = &self.path;

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .map_err(|source| CorpusLoadError::Open { path: path.clone(), source })?;

        let headers = reader
            .headers()
            .map_err(|source| CorpusLoadError::Parse { path: path.clone(), source })?
            .clone();

        let column = |name: &'static str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| CorpusLoadError::MissingColumn { path: path.clone(), column: name })
        };
        let question_col = column(QUESTION_COLUMN)?;
        let answer_col   = column(ANSWER_COLUMN)?;

        let mut entries = Vec::new();
        let mut dropped = 0usize;

        for record in reader.records() {
            let record = record.map_err(|source| CorpusLoadError::Parse { path: path.clone(), source })?;

            match (record.get(question_col), record.get(answer_col)) {
                (Some(q), Some(a)) => {
                    let pair = QaPair::new(q, a);
                    if pair.is_usable() {
                        entries.push(pair);
                    } else {
                        dropped += 1;
                    }
                }
                _ => dropped += 1,
            }
        }

        if dropped > 0 {
            tracing::debug!("Dropped {} rows with a missing question or answer", dropped);
        }

        if entries.is_empty() {
            return Err(CorpusLoadError::Empty { path: path.clone() });
        }

        tracing::info!("Loaded {} corpus entries from '{}'", entries.len(), path.display());
        Ok(entries)
    }

    fn describe(&self) -> String {
        self.path().display().to_string()
    }
}
