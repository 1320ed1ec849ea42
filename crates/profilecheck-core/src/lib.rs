//! Profilecheck Core - Foundation crate for the profile analyzer.
//!
//! This crate provides the shared domain types, error handling and
//! configuration management that all other profilecheck crates depend on.
//!
//! # Modules
//!
//! - [`error`] - Configuration error types using thiserror
//! - [`config`] - TOML-based configuration with environment overrides
//! - [`types`] - Domain types (`Platform`, `ProfileSnapshot`, `AnalysisResult`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod error;
pub mod types;

pub use config::{AnalysisConfig, AppConfig, BrowserConfig, ClassifierConfig, ServerConfig};
pub use error::{ConfigError, ConfigResult};
pub use types::{
    AnalysisData, AnalysisResult, Impact, Indicator, PictureClassification, Platform,
    ProfileSnapshot,
};
