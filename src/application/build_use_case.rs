// ============================================================
// Layer 2 — Build Use Case
// ============================================================
// Runs once at startup and produces the AskUseCase every shell
// shares:
//
//   Step 1: Load the lemmatization lexicon     (Layer 6 - infra)
//   Step 2: Load the corpus, or the fallback   (Layer 4 - data)
//   Step 3: Build the retrieval index          (Layer 5 - ml)
//   Step 4: Wrap it in an AskUseCase           (Layer 2)
//
// A broken corpus file never stops startup (the fallback table
// is served instead). An index that cannot be built does: no
// question could be answered.
//
// Reference: Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ask_use_case::{AskUseCase, CorpusOrigin, CorpusSummary};
use crate::data::fallback::fallback_corpus;
use crate::data::lemmatizer::Lemmatizer;
use crate::data::loader::CsvCorpusLoader;
use crate::data::preprocessor::Preprocessor;
use crate::domain::qa_pair::QaPair;
use crate::domain::traits::CorpusSource;
use crate::infra::lexicon_store::LexiconStore;
use crate::ml::index::RetrievalIndex;

// ─── Build Configuration ─────────────────────────────────────────────────────
// Where the corpus and (optionally) the lexicon come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    pub corpus_path:  PathBuf,
    pub lexicon_path: Option<PathBuf>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            corpus_path:  PathBuf::from("chatbot_dataset.csv"),
            lexicon_path: None,
        }
    }
}

/// A corpus ready for indexing, with its provenance.
#[derive(Debug, Clone)]
pub struct LoadedCorpus {
    pub entries: Vec<QaPair>,
    pub origin:  CorpusOrigin,
}

/// Load from `source`, substituting the fallback table on any error.
pub fn load_with_fallback(source: &dyn CorpusSource) -> LoadedCorpus {
    match source.load_all() {
        Ok(entries) => LoadedCorpus {
            entries,
            origin: CorpusOrigin::Source(source.describe()),
        },
        Err(e) => {
            tracing::warn!("Error loading dataset: {e}. Using the built-in sample corpus");
            LoadedCorpus {
                entries: fallback_corpus(),
                origin:  CorpusOrigin::Fallback,
            }
        }
    }
}

// ─── BuildUseCase ─────────────────────────────────────────────────────────────
pub struct BuildUseCase {
    config: BuildConfig,
}

impl BuildUseCase {
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Execute the startup pipeline end to end.
    pub fn execute(&self) -> Result<AskUseCase> {
        let cfg = &self.config;
        tracing::debug!("Build configuration: {:?}", cfg);

        // ── Step 1: Lexicon ───────────────────────────────────────────────────
        let lexicon = LexiconStore::new(cfg.lexicon_path.clone())
            .load()
            .context("Cannot load the lemmatization lexicon")?;
        let preprocessor = Preprocessor::new(Lemmatizer::new(lexicon));

        // ── Step 2: Corpus ────────────────────────────────────────────────────
        let loader = CsvCorpusLoader::new(&cfg.corpus_path);
        let corpus = load_with_fallback(&loader);

        // ── Step 3: Index ─────────────────────────────────────────────────────
        let index = RetrievalIndex::build(corpus.entries, preprocessor)
            .context("Cannot build the retrieval index")?;
        let summary = CorpusSummary {
            entries: index.len(),
            origin:  corpus.origin,
        };

        tracing::info!(
            "Serving {} questions ({} terms) from {:?}",
            summary.entries,
            index.vocabulary_size(),
            summary.origin
        );

        // ── Step 4: Shared use case ───────────────────────────────────────────
        Ok(AskUseCase::new(Arc::new(index), summary))
    }
}
