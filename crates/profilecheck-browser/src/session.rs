use crate::error::{BrowserError, Result};
use crate::fingerprint::FingerprintConfig;
use chromiumoxide::browser::{Browser, BrowserConfig as ChromeConfig};
use chromiumoxide::page::Page;
use futures::StreamExt;
use profilecheck_core::config::BrowserConfig;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Extra Chrome flags for constrained environments (containers without a
/// usable /dev/shm, no GPU).
const LAUNCH_ARGS: [&str; 3] = ["--disable-dev-shm-usage", "--disable-gpu", "--no-first-run"];

/// One isolated rendering session.
///
/// Each analysis request gets its own browser process; sessions are never
/// pooled or reused. The orchestrator owns the session and calls
/// [`BrowserSession::close`] exactly once on every exit path.
pub struct BrowserSession {
    browser: Browser,
    handler_task: JoinHandle<()>,
    fingerprint: FingerprintConfig,
    settle_delay: Duration,
}

impl BrowserSession {
    /// Launch a fresh headless browser.
    ///
    /// Fails with [`BrowserError::Launch`] when the browser process cannot
    /// be started, e.g. the Chrome executable is missing.
    pub async fn launch(config: &BrowserConfig) -> Result<Self> {
        let fingerprint = FingerprintConfig::realistic();

        let mut builder = ChromeConfig::builder()
            .no_sandbox()
            .window_size(fingerprint.viewport_width, fingerprint.viewport_height)
            .args(LAUNCH_ARGS);

        if !config.headless {
            builder = builder.with_head();
        }
        if let Some(path) = &config.chrome_executable {
            builder = builder.chrome_executable(path);
        }

        let chrome_config = builder.build().map_err(BrowserError::Launch)?;

        tracing::debug!("Launching browser session");
        let (browser, mut handler) = Browser::launch(chrome_config)
            .await
            .map_err(|e| BrowserError::Launch(e.to_string()))?;

        // The handler stream must be driven for the CDP connection to make
        // progress; it ends when the browser closes.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                let _ = event;
            }
        });

        Ok(Self {
            browser,
            handler_task,
            fingerprint,
            settle_delay: Duration::from_millis(config.settle_delay_ms),
        })
    }

    /// Navigate to `url` and return the rendered-page handle.
    ///
    /// The page must reach its load event within `navigation_timeout_ms`;
    /// otherwise [`BrowserError::NavigationTimeout`] is returned. A short
    /// settle delay follows successful navigation so late-rendering profile
    /// content has a chance to appear.
    pub async fn open(&self, url: &str, navigation_timeout_ms: u64) -> Result<Page> {
        let page = self
            .browser
            .new_page("about:blank")
            .await
            .map_err(|e| BrowserError::Launch(format!("could not open page: {e}")))?;

        page.set_user_agent(self.fingerprint.user_agent.as_str())
            .await
            .map_err(|e| BrowserError::Launch(format!("could not set user agent: {e}")))?;

        tracing::debug!(url, "Navigating");
        let navigation = async {
            page.goto(url)
                .await
                .map_err(|e| BrowserError::Navigation(e.to_string()))?;
            page.wait_for_navigation()
                .await
                .map_err(|e| BrowserError::Navigation(e.to_string()))?;
            Ok::<(), BrowserError>(())
        };

        match tokio::time::timeout(Duration::from_millis(navigation_timeout_ms), navigation).await
        {
            Ok(Ok(())) => {}
            Ok(Err(e)) => return Err(e),
            Err(_) => {
                return Err(BrowserError::NavigationTimeout {
                    url: url.to_string(),
                    timeout_ms: navigation_timeout_ms,
                })
            }
        }

        // Profile pages hydrate well after the load event. The overall
        // analysis deadline still bounds this wait.
        if !self.settle_delay.is_zero() {
            tokio::time::sleep(self.settle_delay).await;
        }

        Ok(page)
    }

    /// Close the session and release the browser process.
    ///
    /// Never fails: close errors are logged and swallowed so that release
    /// on error paths cannot mask the original failure.
    pub async fn close(mut self) {
        if let Err(e) = self.browser.close().await {
            tracing::warn!("Failed to close browser cleanly: {}", e);
        }
        if let Err(e) = self.browser.wait().await {
            tracing::warn!("Browser process did not exit cleanly: {}", e);
        }
        self.handler_task.abort();
        tracing::debug!("Browser session released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_args_are_flags() {
        for arg in LAUNCH_ARGS {
            assert!(arg.starts_with("--"));
        }
    }

    #[test]
    fn test_settle_delay_from_config() {
        let config = BrowserConfig {
            settle_delay_ms: 250,
            ..BrowserConfig::default()
        };
        assert_eq!(Duration::from_millis(config.settle_delay_ms).as_millis(), 250);
    }
}
