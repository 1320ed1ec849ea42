use crate::error::{AnalyzeError, Result};
use crate::scoring;
use chrono::{Datelike, Utc};
use profilecheck_browser::BrowserSession;
use profilecheck_classifier::PictureClassifier;
use profilecheck_core::{AnalysisData, AnalysisResult, AppConfig, PictureClassification, Platform};
use profilecheck_extract::{extractor_for, ProfileExtractor};
use std::time::Duration;

/// Drives one analysis request end to end: session open, extraction,
/// picture classification, scoring.
///
/// Analyzers hold no mutable state and no browser; every call to
/// [`ProfileAnalyzer::analyze`] launches its own isolated session, so
/// concurrent requests cannot interfere with each other.
pub struct ProfileAnalyzer {
    config: AppConfig,
    classifier: PictureClassifier,
}

impl ProfileAnalyzer {
    /// Build an analyzer from configuration, read once here.
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        let classifier = PictureClassifier::new(config.classifier.resolved_staging_dir());
        Self { config, classifier }
    }

    /// Analyze the profile at `url`.
    ///
    /// The whole pipeline runs under one wall-clock deadline
    /// (`analysis.timeout_ms`). The browser session lives in a slot outside
    /// the timed future, so even when the deadline cancels the pipeline
    /// mid-flight the session is still released before the timeout error
    /// surfaces.
    pub async fn analyze(&self, url: &str, platform: Platform) -> Result<AnalysisResult> {
        let timeout_ms = self.config.analysis.timeout_ms;
        let mut session_slot: Option<BrowserSession> = None;

        let outcome = tokio::time::timeout(
            Duration::from_millis(timeout_ms),
            self.run_pipeline(url, platform, &mut session_slot),
        )
        .await;

        if let Some(session) = session_slot.take() {
            session.close().await;
        }

        match outcome {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(url, timeout_ms, "Analysis deadline exceeded");
                Err(AnalyzeError::Timeout { timeout_ms })
            }
        }
    }

    async fn run_pipeline(
        &self,
        url: &str,
        platform: Platform,
        session_slot: &mut Option<BrowserSession>,
    ) -> Result<AnalysisResult> {
        tracing::info!(url, %platform, "Starting profile analysis");

        let session = session_slot.insert(BrowserSession::launch(&self.config.browser).await?);
        let page = session
            .open(url, self.config.browser.navigation_timeout_ms)
            .await?;

        let snapshot = extractor_for(platform).extract(&page).await?;
        tracing::debug!(
            username = %snapshot.username,
            has_picture = snapshot.has_profile_picture,
            "Extraction complete"
        );

        let classification = if snapshot.has_profile_picture {
            self.classifier
                .classify(
                    snapshot.profile_picture_url.as_deref(),
                    platform,
                    &snapshot.username,
                )
                .await
        } else {
            PictureClassification::unavailable(Some("No profile picture found".to_string()))
        };

        let (score, indicators) =
            scoring::score_profile(&snapshot, &classification, Utc::now().year());

        let result = AnalysisResult {
            url: url.to_string(),
            platform,
            analysis_data: AnalysisData {
                snapshot,
                profile_picture_analysis: classification,
            },
            score,
            indicators,
            is_fake: scoring::is_fake(score),
            confidence: scoring::confidence(score),
        };

        tracing::info!(
            score = result.score,
            is_fake = result.is_fake,
            confidence = result.confidence,
            "Analysis complete"
        );
        Ok(result)
    }
}
