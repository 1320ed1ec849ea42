//! HTTP boundary for the profile analyzer.
//!
//! Thin plumbing over `profilecheck-analyzer`: request validation, platform
//! classification by URL substring, and error-category to status mapping.
//! All analysis semantics live in the core crates.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use profilecheck_analyzer::{AnalyzeError, ErrorCategory, ProfileAnalyzer};
use profilecheck_core::{AppConfig, Platform};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Deserialize)]
struct AnalyzeRequest {
    #[serde(default)]
    url: String,
}

struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.to_string(),
        }
    }
}

impl From<AnalyzeError> for ApiError {
    fn from(e: AnalyzeError) -> Self {
        let status = match e.category() {
            ErrorCategory::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorCategory::NotFound => StatusCode::NOT_FOUND,
            ErrorCategory::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorCategory::RequestTimeout => StatusCode::REQUEST_TIMEOUT,
        };
        Self {
            status,
            message: e.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

async fn analyze(
    State(config): State<Arc<AppConfig>>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if request.url.is_empty() {
        return Err(ApiError::bad_request("No URL provided"));
    }

    let Some(platform) = Platform::from_url(&request.url) else {
        return Err(ApiError::bad_request(
            "Unsupported platform: URL must be a Facebook, Instagram or Twitter profile",
        ));
    };

    // One analyzer per request; browser sessions are never shared, so
    // concurrent requests stay fully isolated.
    let analyzer = ProfileAnalyzer::new((*config).clone());
    let result = analyzer.analyze(&request.url, platform).await?;
    Ok(Json(result))
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

fn app(config: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/api/analyze", post(analyze))
        .route("/api/health", get(health))
        .with_state(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Arc::new(AppConfig::load_with_env()?);
    let addr = config.server.bind_addr.clone();

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("profilecheck-server listening on {}", addr);
    axum::serve(listener, app(config)).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn test_app() -> Router {
        app(Arc::new(AppConfig::default()))
    }

    fn post_json(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/analyze")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("build request")
    }

    #[tokio::test]
    async fn test_health() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .expect("build request"),
            )
            .await
            .expect("route request");

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_url_is_rejected() {
        let response = test_app()
            .oneshot(post_json(r"{}"))
            .await
            .expect("route request");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unsupported_domain_is_rejected_before_analysis() {
        let response = test_app()
            .oneshot(post_json(r#"{"url": "https://example.com/someone"}"#))
            .await
            .expect("route request");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_browser_runtime_maps_to_503() {
        let mut config = AppConfig::default();
        config.browser.chrome_executable = Some("/nonexistent/chrome-binary".into());
        let router = app(Arc::new(config));

        let response = router
            .oneshot(post_json(r#"{"url": "https://twitter.com/jack"}"#))
            .await
            .expect("route request");
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_category_status_mapping() {
        let launch: ApiError = AnalyzeError::BrowserLaunch("no chrome".to_string()).into();
        assert_eq!(launch.status, StatusCode::SERVICE_UNAVAILABLE);

        let navigation: ApiError = AnalyzeError::Navigation("unreachable".to_string()).into();
        assert_eq!(navigation.status, StatusCode::NOT_FOUND);

        let timeout: ApiError = AnalyzeError::Timeout { timeout_ms: 60_000 }.into();
        assert_eq!(timeout.status, StatusCode::REQUEST_TIMEOUT);
    }
}
