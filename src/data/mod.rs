// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between the corpus file and normalized text:
//
//   chatbot_dataset.csv
//       │
//       ▼
//   CsvCorpusLoader   → reads and cleans Question/Answer rows
//       │               (fallback_corpus() when that fails)
//       ▼
//   Preprocessor      → lower-case, tokenize, lemmatize, join
//       │
//       ▼
//   normalized questions, ready for the TF-IDF vectorizer
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Reads the question/answer table from CSV
pub mod loader;

/// The built-in two-entry corpus
pub mod fallback;

/// Normalizes raw text for matching
pub mod preprocessor;

/// Dictionary-checked base-form reduction
pub mod lemmatizer;
