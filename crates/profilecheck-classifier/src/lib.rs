//! Profile picture classifier.
//!
//! Estimates whether a profile picture shows a real person from nothing but
//! its byte size. This is a documented heuristic, not a model: tiny images
//! are unlikely to be real profile photos, very large ones tend to be
//! high-quality stock photography, and the middle band looks like ordinary
//! user uploads. Classification failure never fails an analysis; it
//! degrades to a default classification with the reason attached.

pub mod classifier;
pub mod error;

pub use classifier::PictureClassifier;
pub use error::ImageError;
