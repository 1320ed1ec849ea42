//! Analysis pipeline: scoring engine, orchestrator and error taxonomy.
//!
//! The orchestrator sequences session open, extraction, picture
//! classification and scoring under one wall-clock deadline, releasing the
//! browser session on every exit path. The scoring engine itself is a pure
//! function and lives in [`scoring`].

pub mod error;
pub mod orchestrator;
pub mod scoring;

pub use error::{AnalyzeError, ErrorCategory, Result};
pub use orchestrator::ProfileAnalyzer;
pub use scoring::score_profile;
