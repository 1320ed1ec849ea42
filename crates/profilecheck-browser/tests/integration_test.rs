use profilecheck_browser::{BrowserError, BrowserSession};
use profilecheck_core::config::BrowserConfig;

#[tokio::test]
#[ignore] // Requires Chrome/Chromium installed
async fn test_session_launch_and_close() {
    let session = BrowserSession::launch(&BrowserConfig::default())
        .await
        .expect("launch browser");
    session.close().await;
}

#[tokio::test]
#[ignore] // Requires Chrome/Chromium installed
async fn test_open_reachable_page() {
    let session = BrowserSession::launch(&BrowserConfig::default())
        .await
        .expect("launch browser");

    let result = session.open("https://example.com", 30_000).await;
    assert!(result.is_ok(), "navigation failed: {:?}", result.err());

    session.close().await;
}

#[tokio::test]
#[ignore] // Requires Chrome/Chromium installed
async fn test_navigation_timeout_surfaces() {
    let config = BrowserConfig {
        settle_delay_ms: 0,
        ..BrowserConfig::default()
    };
    let session = BrowserSession::launch(&config).await.expect("launch browser");

    // 1ms budget cannot complete any real navigation.
    let result = session.open("https://example.com", 1).await;
    assert!(matches!(
        result,
        Err(BrowserError::NavigationTimeout { .. })
    ));

    session.close().await;
}

#[tokio::test]
async fn test_launch_fails_with_bogus_executable() {
    let config = BrowserConfig {
        chrome_executable: Some("/nonexistent/chrome-binary".into()),
        ..BrowserConfig::default()
    };

    let result = BrowserSession::launch(&config).await;
    assert!(matches!(result, Err(BrowserError::Launch(_))));
}
