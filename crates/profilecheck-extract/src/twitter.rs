//! Twitter/X profile extraction.
//!
//! Twitter marks its profile widgets with stable `data-testid` attributes,
//! which makes this the least markup-fragile adapter of the three.

use crate::adapter::{
    detect_external_links, dismiss_via_close_button, picture_presence, query_all_texts,
    query_attr, query_text, ProfileExtractor,
};
use crate::error::{ExtractionError, Result};
use crate::parse;
use chromiumoxide::page::Page;
use profilecheck_core::{Platform, ProfileSnapshot};

const LOGIN_DIALOG: &str = r#"div[aria-modal="true"]"#;
const CLOSE_BUTTON: &str = r#"div[aria-label="Close"]"#;
const PROFILE_PICTURE: &str = r#"img[alt="Profile image"]"#;
const USERNAME: &str = r#"div[data-testid="UserName"]"#;
const BIO: &str = r#"div[data-testid="UserDescription"]"#;
const JOIN_DATE: &str = r#"span[data-testid="UserJoinDate"]"#;
const TWEETS: &str = r#"div[data-testid="tweetText"]"#;
const FOLLOWERS_LINKS: &str = r#"a[href*="/followers"]"#;
const FOLLOWING_LINKS: &str = r#"a[href*="/following"]"#;
const PLACEHOLDER_PATTERN: &str = "default_profile";

pub struct TwitterExtractor;

#[async_trait::async_trait]
impl ProfileExtractor for TwitterExtractor {
    fn platform(&self) -> Platform {
        Platform::Twitter
    }

    async fn extract(&self, page: &Page) -> Result<ProfileSnapshot> {
        dismiss_via_close_button(page, LOGIN_DIALOG, CLOSE_BUTTON).await;

        let mut snapshot = ProfileSnapshot::new(Platform::Twitter);

        let src = query_attr(page, PROFILE_PICTURE, "src").await;
        let (has_picture, picture_url) = picture_presence(src, PLACEHOLDER_PATTERN);
        snapshot.has_profile_picture = has_picture;
        snapshot.profile_picture_url = picture_url;

        snapshot.username = query_text(page, USERNAME).await.unwrap_or_default();
        snapshot.has_bio = query_text(page, BIO).await.is_some();

        // Follower statistics are anchors to /followers and /following,
        // labeled "N Followers" / "N Following".
        let follower_texts = query_all_texts(page, FOLLOWERS_LINKS).await;
        let following_texts = query_all_texts(page, FOLLOWING_LINKS).await;
        let followers = follower_texts
            .iter()
            .find_map(|text| parse::labeled_count(text, "followers"));
        let following = following_texts
            .iter()
            .find_map(|text| parse::labeled_count(text, "following"));
        if !follower_texts.is_empty() || !following_texts.is_empty() {
            snapshot.set_follow_counts(followers.unwrap_or(0.0), following.unwrap_or(0.0));
        }

        snapshot.join_date = query_text(page, JOIN_DATE).await;

        let mut captions = query_all_texts(page, TWEETS).await;
        captions.truncate(5);
        snapshot.post_captions = Some(captions);

        snapshot.has_external_links = detect_external_links(page, Platform::Twitter).await;

        if snapshot.is_empty() {
            return Err(ExtractionError::Unrecognized {
                platform: Platform::Twitter,
            });
        }
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follower_anchor_text_parsing() {
        let texts = vec!["1,024 Followers".to_string()];
        let followers = texts
            .iter()
            .find_map(|text| parse::labeled_count(text, "followers"));
        assert_eq!(followers, Some(1024.0));
    }

    #[test]
    fn test_anchor_present_but_unparseable_defaults_to_zero() {
        let follower_texts = vec!["Followers".to_string()];
        let followers = follower_texts
            .iter()
            .find_map(|text| parse::labeled_count(text, "followers"));
        assert_eq!(followers.unwrap_or(0.0), 0.0);
    }
}
