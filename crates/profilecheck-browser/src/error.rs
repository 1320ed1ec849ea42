use thiserror::Error;

pub type Result<T> = std::result::Result<T, BrowserError>;

#[derive(Debug, Error)]
pub enum BrowserError {
    /// The browser session could not be created at all, e.g. the Chrome
    /// executable is missing.
    #[error("browser launch failed: {0}")]
    Launch(String),

    /// The target page could not be reached or did not load.
    #[error("navigation failed: {0}")]
    Navigation(String),

    /// The page did not reach content-loaded within the navigation budget.
    #[error("navigation to {url} timed out after {timeout_ms}ms")]
    NavigationTimeout { url: String, timeout_ms: u64 },
}
