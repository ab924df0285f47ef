// ============================================================
// Layer 5 — ML / Retrieval Layer
// ============================================================
// All vector maths lives here; no other layer computes weights
// or distances.
//
//   vectorizer.rs — TF-IDF vocabulary, idf weights, sparse vectors
//   model.rs      — brute-force nearest neighbor (Euclidean)
//   index.rs      — RetrievalIndex: normalizer + vectorizer +
//                   model behind build() and query()
//
// Reference: Manning, Raghavan & Schütze (2008)
//            Introduction to Information Retrieval, ch. 6

/// TF-IDF vectorizer and sparse vectors
pub mod vectorizer;

/// Single nearest-neighbor search over the feature matrix
pub mod model;

/// The immutable retrieval index built at startup
pub mod index;
