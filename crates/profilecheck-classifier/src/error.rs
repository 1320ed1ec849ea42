use thiserror::Error;

/// Image retrieval/classification failures.
///
/// These never propagate out of the classifier; they are downgraded to a
/// default classification carrying the message.
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("image request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("image request returned HTTP {0}")]
    Status(u16),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
