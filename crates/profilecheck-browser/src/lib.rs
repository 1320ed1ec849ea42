//! Browser session controller for profile analysis.
//!
//! Provides one isolated headless-Chrome session per analysis request:
//! launch, bounded navigation, a queryable rendered-page handle, and
//! guaranteed release of the underlying browser process.

pub mod error;
pub mod fingerprint;
pub mod session;

pub use error::{BrowserError, Result};
pub use fingerprint::FingerprintConfig;
pub use session::BrowserSession;
