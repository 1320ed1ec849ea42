use profilecheck_browser::BrowserError;
use profilecheck_extract::ExtractionError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalyzeError>;

/// Fatal analysis errors. Everything else (picture retrieval, overlay
/// dismissal, temp-file cleanup) degrades in place and never reaches here.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// The browser session could not be created at all.
    #[error("browser session could not be started: {0}")]
    BrowserLaunch(String),

    /// The profile page was unreachable or did not load in time.
    #[error("profile page could not be loaded: {0}")]
    Navigation(String),

    /// The page loaded but its structure was not recognizable.
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    /// The overall analysis deadline elapsed.
    #[error("analysis timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },
}

impl From<BrowserError> for AnalyzeError {
    fn from(e: BrowserError) -> Self {
        match e {
            BrowserError::Launch(msg) => Self::BrowserLaunch(msg),
            BrowserError::Navigation(_) | BrowserError::NavigationTimeout { .. } => {
                Self::Navigation(e.to_string())
            }
        }
    }
}

/// Boundary-facing category of a fatal error, for callers that map errors
/// to user-facing responses without inspecting internals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The service cannot do its job at all (no browser runtime).
    ServiceUnavailable,
    /// The target profile could not be reached or loaded.
    NotFound,
    /// The page loaded but could not be processed.
    Unprocessable,
    /// The analysis deadline elapsed.
    RequestTimeout,
}

impl AnalyzeError {
    /// Map this error to its boundary category.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::BrowserLaunch(_) => ErrorCategory::ServiceUnavailable,
            Self::Navigation(_) => ErrorCategory::NotFound,
            Self::Extraction(_) => ErrorCategory::Unprocessable,
            Self::Timeout { .. } => ErrorCategory::RequestTimeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use profilecheck_core::Platform;

    #[test]
    fn test_categories() {
        assert_eq!(
            AnalyzeError::BrowserLaunch("no chrome".to_string()).category(),
            ErrorCategory::ServiceUnavailable
        );
        assert_eq!(
            AnalyzeError::Navigation("dns failure".to_string()).category(),
            ErrorCategory::NotFound
        );
        assert_eq!(
            AnalyzeError::Extraction(ExtractionError::Unrecognized {
                platform: Platform::Facebook
            })
            .category(),
            ErrorCategory::Unprocessable
        );
        assert_eq!(
            AnalyzeError::Timeout { timeout_ms: 60_000 }.category(),
            ErrorCategory::RequestTimeout
        );
    }

    #[test]
    fn test_navigation_timeout_is_navigation_not_timeout() {
        // A navigation that exceeds its own budget reports the page as
        // inaccessible; only the overall deadline is a request timeout.
        let err: AnalyzeError = BrowserError::NavigationTimeout {
            url: "https://x.com/jack".to_string(),
            timeout_ms: 30_000,
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn test_launch_error_conversion() {
        let err: AnalyzeError = BrowserError::Launch("spawn failed".to_string()).into();
        assert!(matches!(err, AnalyzeError::BrowserLaunch(_)));
    }
}
