//! Instagram profile extraction.

use crate::adapter::{
    detect_external_links, dismiss_via_outside_click, element_exists, picture_presence,
    query_all_texts, query_attr, query_text, ProfileExtractor,
};
use crate::error::{ExtractionError, Result};
use crate::parse;
use chromiumoxide::page::Page;
use profilecheck_core::{Platform, ProfileSnapshot};

const LOGIN_DIALOG: &str = r#"div[role="dialog"]"#;
const PROFILE_PICTURE: &str = r#"img[alt*="profile picture"]"#;
const CAPTIONS: &str = r#"div[class*="caption"]"#;
const TAGGED_TAB: &str = r#"a[href*="/tagged"]"#;
const PLACEHOLDER_PATTERN: &str = "default";

pub struct InstagramExtractor;

#[async_trait::async_trait]
impl ProfileExtractor for InstagramExtractor {
    fn platform(&self) -> Platform {
        Platform::Instagram
    }

    async fn extract(&self, page: &Page) -> Result<ProfileSnapshot> {
        // Instagram's login modal closes on any click outside it.
        dismiss_via_outside_click(page, LOGIN_DIALOG).await;

        let mut snapshot = ProfileSnapshot::new(Platform::Instagram);

        let src = query_attr(page, PROFILE_PICTURE, "src").await;
        let (has_picture, picture_url) = picture_presence(src, PLACEHOLDER_PATTERN);
        snapshot.has_profile_picture = has_picture;
        snapshot.profile_picture_url = picture_url;

        snapshot.username = query_text(page, "h2").await.unwrap_or_default();
        snapshot.has_bio = query_text(page, "h1").await.is_some();

        // Post count lives in a stats span reading "N posts".
        snapshot.post_count = query_all_texts(page, "span")
            .await
            .iter()
            .find(|text| text.contains("posts"))
            .map(|text| parse::labeled_whole_count(text, "posts").unwrap_or(0));

        // Follower statistics are list items reading "N followers" /
        // "N following". A label whose number fails to parse counts as 0.
        let list_items = query_all_texts(page, "li").await;
        let followers = list_items
            .iter()
            .find(|text| text.contains("followers"))
            .map(|text| parse::labeled_count(text, "followers").unwrap_or(0.0));
        let following = list_items
            .iter()
            .find(|text| text.contains("following"))
            .map(|text| parse::labeled_count(text, "following").unwrap_or(0.0));
        if followers.is_some() || following.is_some() {
            snapshot.set_follow_counts(followers.unwrap_or(0.0), following.unwrap_or(0.0));
        }

        let mut captions = query_all_texts(page, CAPTIONS).await;
        captions.truncate(5);
        snapshot.post_captions = Some(captions);

        snapshot.has_external_links = detect_external_links(page, Platform::Instagram).await;
        snapshot.has_tagged_content = Some(element_exists(page, TAGGED_TAB).await);

        if snapshot.is_empty() {
            return Err(ExtractionError::Unrecognized {
                platform: Platform::Instagram,
            });
        }

        // Instagram always surfaces a post count for recognizable profiles;
        // a hidden stats span (login wall) reads as zero posts, not as an
        // uncounted platform.
        if snapshot.post_count.is_none() {
            snapshot.post_count = Some(0);
        }
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_stat_label_selection() {
        let list_items = vec![
            "42 posts".to_string(),
            "1,234 followers".to_string(),
            "567 following".to_string(),
        ];

        let followers = list_items
            .iter()
            .find(|text| text.contains("followers"))
            .map(|text| parse::labeled_count(text, "followers").unwrap_or(0.0));
        let following = list_items
            .iter()
            .find(|text| text.contains("following"))
            .map(|text| parse::labeled_count(text, "following").unwrap_or(0.0));

        assert_eq!(followers, Some(1234.0));
        assert_eq!(following, Some(567.0));
    }

    #[test]
    fn test_unparseable_label_counts_as_zero() {
        let text = "many followers";
        let followers = parse::labeled_count(text, "followers").unwrap_or(0.0);
        assert_eq!(followers, 0.0);
    }
}
