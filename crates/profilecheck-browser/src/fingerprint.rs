/// Fingerprint presented to target sites to reduce anti-bot friction.
///
/// A fixed, realistic desktop profile. Profile pages are fetched once per
/// analysis from a fresh browser, so there is nothing to rotate between.
#[derive(Debug, Clone)]
pub struct FingerprintConfig {
    pub user_agent: String,
    pub viewport_width: u32,
    pub viewport_height: u32,
}

impl FingerprintConfig {
    /// Desktop Chrome on Windows, 1280x800 viewport.
    #[must_use]
    pub fn realistic() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
                .to_string(),
            viewport_width: 1280,
            viewport_height: 800,
        }
    }
}

impl Default for FingerprintConfig {
    fn default() -> Self {
        Self::realistic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_realistic_fingerprint() {
        let config = FingerprintConfig::realistic();
        assert!(config.user_agent.contains("Chrome"));
        assert!(!config.user_agent.contains("Headless"));
        assert_eq!(config.viewport_width, 1280);
        assert_eq!(config.viewport_height, 800);
    }
}
