//! Domain types shared across the profilecheck workspace.
//!
//! All records here are created fresh for a single analysis request and
//! discarded with the response; nothing is cached or persisted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported social-media platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// facebook.com / fb.com
    Facebook,
    /// instagram.com
    Instagram,
    /// twitter.com / x.com
    Twitter,
}

impl Platform {
    /// Classify a profile URL by domain substring.
    ///
    /// Returns `None` for unsupported domains; callers reject those before
    /// any analysis work starts.
    #[must_use]
    pub fn from_url(url: &str) -> Option<Self> {
        let url = url.to_ascii_lowercase();
        if url.contains("facebook.com") || url.contains("fb.com") {
            Some(Self::Facebook)
        } else if url.contains("instagram.com") {
            Some(Self::Instagram)
        } else if url.contains("twitter.com") || url.contains("x.com") {
            Some(Self::Twitter)
        } else {
            None
        }
    }

    /// Lowercase platform tag as used in serialized output and file names.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Facebook => "facebook",
            Self::Instagram => "instagram",
            Self::Twitter => "twitter",
        }
    }

    /// Domains considered "own" links for this platform.
    ///
    /// Links to any of these do not count as external links in a bio.
    #[must_use]
    pub fn own_domains(self) -> &'static [&'static str] {
        match self {
            Self::Facebook => &["facebook.com", "fb.com"],
            Self::Instagram => &["instagram.com"],
            Self::Twitter => &["twitter.com", "x.com"],
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized profile fields extracted from a rendered page.
///
/// Every field is fail-soft: a selector miss during extraction leaves the
/// documented default (`false`, `None`, empty) rather than failing the
/// analysis. `post_captions` is `None` only when the platform adapter does
/// not collect captions at all; an adapter that looked and found nothing
/// sets `Some(vec![])`, which the scoring engine treats differently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSnapshot {
    /// Platform this snapshot was extracted from.
    pub platform: Platform,
    /// Display name or handle; empty string when not found.
    pub username: String,
    /// True only if a picture element was found and its address does not
    /// match the platform's placeholder pattern.
    pub has_profile_picture: bool,
    /// Address of the profile picture element, placeholder or not.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture_url: Option<String>,
    /// Whether any bio/about content was found.
    pub has_bio: bool,
    /// Number of posts, where the platform exposes one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_count: Option<u32>,
    /// Follower count parsed from free-text labels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub followers: Option<f64>,
    /// Following count parsed from free-text labels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub following: Option<f64>,
    /// following / followers; 0 when followers is 0. Only defined when both
    /// counts were extracted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_ratio: Option<f64>,
    /// Free-text join date, platform-specific format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_date: Option<String>,
    /// Up to 5 post captions in document order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_captions: Option<Vec<String>>,
    /// Whether the page links anywhere off-platform.
    pub has_external_links: bool,
    /// Facebook only: visible friend count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friend_count: Option<u32>,
    /// Instagram only: whether a tagged-content tab is visible.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_tagged_content: Option<bool>,
}

impl ProfileSnapshot {
    /// Create an empty snapshot for a platform, all fields at their
    /// fail-soft defaults.
    #[must_use]
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            username: String::new(),
            has_profile_picture: false,
            profile_picture_url: None,
            has_bio: false,
            post_count: None,
            followers: None,
            following: None,
            follow_ratio: None,
            join_date: None,
            post_captions: None,
            has_external_links: false,
            friend_count: None,
            has_tagged_content: None,
        }
    }

    /// Record follower/following counts and derive the follow ratio.
    pub fn set_follow_counts(&mut self, followers: f64, following: f64) {
        self.followers = Some(followers);
        self.following = Some(following);
        self.follow_ratio = Some(if followers > 0.0 {
            following / followers
        } else {
            0.0
        });
    }

    /// Whether extraction produced anything at all.
    ///
    /// A snapshot with no username, no picture, no bio and no counts means
    /// the page structure was unrecognizable; adapters turn that into a
    /// structural extraction error instead of scoring an empty record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.username.is_empty()
            && self.profile_picture_url.is_none()
            && !self.has_bio
            && self.followers.is_none()
            && self.following.is_none()
            && self.post_count.is_none()
            && self.friend_count.is_none()
    }
}

/// Outcome of the profile-picture size heuristic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PictureClassification {
    /// Best guess that the picture shows a real person.
    pub is_human: bool,
    /// Heuristic confidence in [0, 1].
    pub confidence: f64,
    /// Best guess that the picture is stock photography.
    pub stock_photo: bool,
    /// Set when retrieval or classification failed and the defaults above
    /// were substituted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PictureClassification {
    /// Default classification used when no picture exists or retrieval
    /// failed: not human, zero confidence, not stock.
    #[must_use]
    pub fn unavailable(error: Option<String>) -> Self {
        Self {
            is_human: false,
            confidence: 0.0,
            stock_photo: false,
            error,
        }
    }
}

impl Default for PictureClassification {
    fn default() -> Self {
        Self::unavailable(None)
    }
}

/// Severity tier of a scoring indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    /// Strong fake signal.
    High,
    /// Moderate fake signal.
    Medium,
    /// Weak fake signal.
    Low,
    /// Signal in favor of the profile being real.
    Positive,
}

/// One scored signal with a human-readable explanation.
///
/// Indicators appear in rule evaluation order, not severity order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Indicator {
    /// Short label for the signal ("Profile Picture", "Username", ...).
    pub factor: String,
    /// Human-readable explanation of what was observed.
    pub issue: String,
    /// Severity tier.
    pub impact: Impact,
}

impl Indicator {
    /// Convenience constructor.
    #[must_use]
    pub fn new(factor: &str, issue: &str, impact: Impact) -> Self {
        Self {
            factor: factor.to_string(),
            issue: issue.to_string(),
            impact,
        }
    }
}

/// Snapshot merged with its picture classification, as serialized in the
/// analysis response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisData {
    /// Extracted profile fields.
    #[serde(flatten)]
    pub snapshot: ProfileSnapshot,
    /// Picture heuristic outcome.
    pub profile_picture_analysis: PictureClassification,
}

/// Final verdict for one analyzed profile URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// The URL that was analyzed.
    pub url: String,
    /// Platform resolved from the URL.
    pub platform: Platform,
    /// Extracted fields plus picture classification.
    pub analysis_data: AnalysisData,
    /// Authenticity score in [0, 100]; lower means more likely fake.
    pub score: u8,
    /// Signals that contributed to the score, in evaluation order.
    pub indicators: Vec<Indicator>,
    /// Verdict: true iff `score < 45`.
    pub is_fake: bool,
    /// Distance-from-threshold confidence, `|45 - score| * 2`.
    ///
    /// Intentionally not clamped to 100; scores near the extremes produce
    /// values up to 110.
    pub confidence: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_from_url() {
        assert_eq!(
            Platform::from_url("https://www.facebook.com/zuck"),
            Some(Platform::Facebook)
        );
        assert_eq!(
            Platform::from_url("https://fb.com/zuck"),
            Some(Platform::Facebook)
        );
        assert_eq!(
            Platform::from_url("https://instagram.com/alice"),
            Some(Platform::Instagram)
        );
        assert_eq!(
            Platform::from_url("https://twitter.com/jack"),
            Some(Platform::Twitter)
        );
        assert_eq!(
            Platform::from_url("https://x.com/jack"),
            Some(Platform::Twitter)
        );
        assert_eq!(Platform::from_url("https://example.com/profile"), None);
    }

    #[test]
    fn test_platform_from_url_case_insensitive() {
        assert_eq!(
            Platform::from_url("HTTPS://WWW.INSTAGRAM.COM/Alice"),
            Some(Platform::Instagram)
        );
    }

    #[test]
    fn test_follow_ratio_derivation() {
        let mut snapshot = ProfileSnapshot::new(Platform::Instagram);
        snapshot.set_follow_counts(200.0, 400.0);
        assert_eq!(snapshot.follow_ratio, Some(2.0));

        let mut zero = ProfileSnapshot::new(Platform::Instagram);
        zero.set_follow_counts(0.0, 500.0);
        assert_eq!(zero.follow_ratio, Some(0.0));
    }

    #[test]
    fn test_empty_snapshot_detection() {
        let mut snapshot = ProfileSnapshot::new(Platform::Twitter);
        assert!(snapshot.is_empty());

        snapshot.username = "jack".to_string();
        assert!(!snapshot.is_empty());
    }

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let mut snapshot = ProfileSnapshot::new(Platform::Instagram);
        snapshot.username = "alice".to_string();
        snapshot.has_profile_picture = true;
        snapshot.set_follow_counts(500.0, 200.0);

        let json = serde_json::to_value(&snapshot).expect("serialize snapshot");
        assert_eq!(json["platform"], "instagram");
        assert_eq!(json["hasProfilePicture"], true);
        assert_eq!(json["followRatio"], 0.4);
        // Absent optional fields are omitted, not null.
        assert!(json.get("postCount").is_none());
        assert!(json.get("friendCount").is_none());
    }

    #[test]
    fn test_analysis_data_flattens_snapshot() {
        let data = AnalysisData {
            snapshot: ProfileSnapshot::new(Platform::Facebook),
            profile_picture_analysis: PictureClassification::unavailable(Some(
                "No profile picture found".to_string(),
            )),
        };

        let json = serde_json::to_value(&data).expect("serialize analysis data");
        assert_eq!(json["hasBio"], false);
        assert_eq!(json["profilePictureAnalysis"]["isHuman"], false);
        assert_eq!(
            json["profilePictureAnalysis"]["error"],
            "No profile picture found"
        );
    }

    #[test]
    fn test_impact_serializes_lowercase() {
        let indicator = Indicator::new("Bio", "Missing bio information", Impact::Low);
        let json = serde_json::to_value(&indicator).expect("serialize indicator");
        assert_eq!(json["impact"], "low");
    }
}
