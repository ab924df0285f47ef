// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Workflow coordination only:
//   - No vector maths here (that's Layer 5)
//   - No printing or HTML here (that's Layer 1)
//   - No direct file parsing (that's Layers 4 and 6)
//
// build_use_case.rs runs once at startup; ask_use_case.rs runs
// once per question.
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Startup: lexicon, corpus (with fallback), retrieval index
pub mod build_use_case;

// Per-question: raw text in, displayable Reply out
pub mod ask_use_case;
