//! Configuration management for profilecheck.
//!
//! Provides TOML-based configuration with environment variable overrides.
//! All values are read once at startup and passed into the components that
//! need them; nothing reads ambient state after construction.

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main application configuration.
///
/// Loaded from the path in `PROFILECHECK_CONFIG`, falling back to
/// `profilecheck.toml` in the working directory. If no file exists,
/// default values are used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Browser session settings
    pub browser: BrowserConfig,
    /// Analysis pipeline settings
    pub analysis: AnalysisConfig,
    /// Picture classifier settings
    pub classifier: ClassifierConfig,
    /// HTTP boundary settings
    pub server: ServerConfig,
}

impl AppConfig {
    /// Load configuration from disk, falling back to defaults if not found.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or is not valid
    /// TOML.
    pub fn load() -> ConfigResult<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            tracing::debug!("Loading config from {}", config_path.display());
            let contents = fs::read_to_string(&config_path)?;
            let config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            tracing::debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration with environment variable overrides.
    ///
    /// Supports the following environment variables:
    /// - `PROFILECHECK_CHROME_EXECUTABLE`: path to the Chrome/Chromium binary
    /// - `PROFILECHECK_NAVIGATION_TIMEOUT_MS`: per-navigation timeout
    /// - `PROFILECHECK_ANALYSIS_TIMEOUT_MS`: overall analysis deadline
    /// - `PROFILECHECK_STAGING_DIR`: directory for downloaded images
    /// - `PROFILECHECK_BIND_ADDR`: HTTP listen address
    pub fn load_with_env() -> ConfigResult<Self> {
        let mut config = Self::load()?;

        if let Ok(val) = std::env::var("PROFILECHECK_CHROME_EXECUTABLE") {
            if !val.is_empty() {
                tracing::debug!("Override browser.chrome_executable from env: {}", val);
                config.browser.chrome_executable = Some(PathBuf::from(val));
            }
        }

        if let Ok(val) = std::env::var("PROFILECHECK_NAVIGATION_TIMEOUT_MS") {
            if let Ok(ms) = val.parse() {
                tracing::debug!("Override browser.navigation_timeout_ms from env: {}", ms);
                config.browser.navigation_timeout_ms = ms;
            }
        }

        if let Ok(val) = std::env::var("PROFILECHECK_ANALYSIS_TIMEOUT_MS") {
            if let Ok(ms) = val.parse() {
                tracing::debug!("Override analysis.timeout_ms from env: {}", ms);
                config.analysis.timeout_ms = ms;
            }
        }

        if let Ok(val) = std::env::var("PROFILECHECK_STAGING_DIR") {
            if !val.is_empty() {
                tracing::debug!("Override classifier.staging_dir from env: {}", val);
                config.classifier.staging_dir = Some(PathBuf::from(val));
            }
        }

        if let Ok(val) = std::env::var("PROFILECHECK_BIND_ADDR") {
            if !val.is_empty() {
                tracing::debug!("Override server.bind_addr from env: {}", val);
                config.server.bind_addr = val;
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that cannot work.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.analysis.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "analysis.timeout_ms".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.browser.navigation_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "browser.navigation_timeout_ms".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Get the path to the configuration file.
    #[must_use]
    pub fn config_path() -> PathBuf {
        std::env::var("PROFILECHECK_CONFIG")
            .map_or_else(|_| PathBuf::from("profilecheck.toml"), PathBuf::from)
    }
}

/// Browser session settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Run the browser in headless mode
    pub headless: bool,
    /// Explicit Chrome/Chromium executable path; autodetected when absent
    pub chrome_executable: Option<PathBuf>,
    /// Navigation timeout in milliseconds
    pub navigation_timeout_ms: u64,
    /// Settle delay after content-loaded, for late-rendering profile pages
    pub settle_delay_ms: u64,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            chrome_executable: None,
            navigation_timeout_ms: 30_000,
            settle_delay_ms: 5_000,
        }
    }
}

/// Analysis pipeline settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Overall wall-clock deadline per analysis request, in milliseconds
    pub timeout_ms: u64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self { timeout_ms: 60_000 }
    }
}

/// Picture classifier settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Staging directory for downloaded profile pictures.
    ///
    /// Shared across concurrent requests; files inside it are uniquely
    /// named per request. Defaults to `profilecheck` under the OS temp dir.
    pub staging_dir: Option<PathBuf>,
}

impl ClassifierConfig {
    /// Resolve the staging directory, applying the default.
    #[must_use]
    pub fn resolved_staging_dir(&self) -> PathBuf {
        self.staging_dir
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("profilecheck"))
    }
}

/// HTTP boundary settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address for the HTTP server
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:5000".to_string(),
        }
    }
}
