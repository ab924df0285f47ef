// ============================================================
// Layer 6 — Lexicon Store
// ============================================================
// Loads the lemmatization dictionary once at startup.
//
// Two sources:
//   - the word list compiled into the binary (assets/lexicon.txt)
//   - an operator-supplied file with the same format, for
//     corpora whose vocabulary the built-in list does not cover
//
// File format (UTF-8, one entry per line):
//   policy          ← a base form
//   went go         ← an irregular form and its base form
//   # comment       ← ignored, as are blank lines
//
// Reference: Rust Book §9 (Error Handling with anyhow)

use anyhow::{bail, Context, Result};
use std::path::PathBuf;

use crate::data::lemmatizer::Lexicon;

/// The built-in word list.
const EMBEDDED_LEXICON: &str = include_str!("../../assets/lexicon.txt");

pub struct LexiconStore {
    /// Optional override file; None means the embedded list
    path: Option<PathBuf>,
}

impl LexiconStore {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    /// Load the configured lexicon.
    ///
    /// An override file that cannot be read, or that holds no
    /// entries, is an error: the operator asked for it explicitly.
    pub fn load(&self) -> Result<Lexicon> {
        let Some(path) = &self.path else {
            let lexicon = Self::embedded();
            tracing::debug!("Using built-in lexicon ({} entries)", lexicon.len());
            return Ok(lexicon);
        };

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read lexicon file '{}'", path.display()))?;
        let lexicon = parse_lexicon(&text);
        if lexicon.is_empty() {
            bail!("Lexicon file '{}' contains no entries", path.display());
        }

        tracing::info!(
            "Loaded lexicon from '{}' ({} entries)",
            path.display(),
            lexicon.len()
        );
        Ok(lexicon)
    }

    /// The lexicon compiled into the binary.
    pub fn embedded() -> Lexicon {
        parse_lexicon(EMBEDDED_LEXICON)
    }
}

/// Parse the line-oriented lexicon format.
/// Lines with more than two words are skipped with a warning.
pub fn parse_lexicon(text: &str) -> Lexicon {
    let mut lexicon = Lexicon::new();

    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [base] => lexicon.add_base(base),
            [inflected, base] => lexicon.add_irregular(inflected, base),
            _ => tracing::warn!("Ignoring malformed lexicon line {}: '{}'", lineno + 1, line),
        }
    }

    lexicon
}
