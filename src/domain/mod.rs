// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust types and traits describing the chatbot:
//
//   qa_pair.rs  — one row of the FAQ table
//   outcome.rs  — query outcomes and user-facing replies
//   error.rs    — typed failures of the pipeline
//   traits.rs   — seams between the layers
//
// Rules for this layer:
//   - NO file I/O or HTTP
//   - NO vectorization or distance maths
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

pub mod error;

pub mod outcome;

pub mod qa_pair;

pub mod traits;
