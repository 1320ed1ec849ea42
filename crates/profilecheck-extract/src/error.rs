use profilecheck_core::Platform;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExtractionError>;

#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The page yielded no profile fields at all. Individual missing fields
    /// degrade to defaults; this fires only when the structure is so far
    /// from a profile page that nothing could be derived.
    #[error("page structure not recognized as a {platform} profile")]
    Unrecognized { platform: Platform },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_names_platform() {
        let err = ExtractionError::Unrecognized {
            platform: Platform::Instagram,
        };
        assert_eq!(
            err.to_string(),
            "page structure not recognized as a instagram profile"
        );
    }
}
