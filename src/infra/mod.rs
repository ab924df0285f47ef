// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting support used by several layers:
//
//   lexicon_store.rs — loads the lemmatization dictionary,
//                      either the built-in word list or an
//                      operator-supplied file
//
//   metrics.rs       — reply counters exposed by the web shell
//
// Reference: Rust Book §7 (Modules)

/// Lemmatization dictionary loading
pub mod lexicon_store;

/// Reply counters
pub mod metrics;
