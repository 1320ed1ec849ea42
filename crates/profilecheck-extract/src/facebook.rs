//! Facebook profile extraction.
//!
//! Facebook's public markup is class-obfuscated; the class chains below are
//! the ones profile pages currently render. When they rot, every field
//! degrades to its default and only a fully unrecognizable page errors.

use crate::adapter::{
    detect_external_links, dismiss_via_close_button, picture_presence, query_all_texts,
    query_attr, query_text, ProfileExtractor,
};
use crate::error::{ExtractionError, Result};
use crate::parse;
use chromiumoxide::page::Page;
use profilecheck_core::{Platform, ProfileSnapshot};

const LOGIN_DIALOG: &str = ".x9f619.x1n2onr6.x1ja2u2z";
const CLOSE_BUTTON: &str = r#"div[aria-label="Close"]"#;
const PROFILE_PICTURE: &str = r#"img[data-imgperflogname="profileCoverPhoto"]"#;
const CONTENT_BLOCKS: &str = ".kvgmc6g5.cxmmr5t8.oygrvhab.hcukyx3x.c1et5uql";
const FRIENDS_LINKS: &str = r#"a[href*="/friends"]"#;
const PLACEHOLDER_PATTERN: &str = "silhouette";

/// Captions shorter than this are chrome text, not post content.
const MIN_CAPTION_LEN: usize = 10;

pub struct FacebookExtractor;

#[async_trait::async_trait]
impl ProfileExtractor for FacebookExtractor {
    fn platform(&self) -> Platform {
        Platform::Facebook
    }

    async fn extract(&self, page: &Page) -> Result<ProfileSnapshot> {
        dismiss_via_close_button(page, LOGIN_DIALOG, CLOSE_BUTTON).await;

        let mut snapshot = ProfileSnapshot::new(Platform::Facebook);

        let src = query_attr(page, PROFILE_PICTURE, "src").await;
        let (has_picture, picture_url) = picture_presence(src, PLACEHOLDER_PATTERN);
        snapshot.has_profile_picture = has_picture;
        snapshot.profile_picture_url = picture_url;

        snapshot.username = query_text(page, "h1").await.unwrap_or_default();

        // Bio and post captions share the same content-block markup.
        let blocks = query_all_texts(page, CONTENT_BLOCKS).await;
        snapshot.has_bio = !blocks.is_empty();
        let mut captions: Vec<String> = blocks
            .into_iter()
            .filter(|text| text.len() > MIN_CAPTION_LEN)
            .collect();
        captions.truncate(5);
        snapshot.post_captions = Some(captions);

        snapshot.join_date = query_all_texts(page, "span")
            .await
            .into_iter()
            .find(|text| text.contains("Joined"));

        snapshot.has_external_links = detect_external_links(page, Platform::Facebook).await;

        snapshot.friend_count = query_all_texts(page, FRIENDS_LINKS)
            .await
            .iter()
            .find(|text| text.contains("friends"))
            .and_then(|text| parse::labeled_whole_count(text, "friends"));

        if snapshot.is_empty() {
            return Err(ExtractionError::Unrecognized {
                platform: Platform::Facebook,
            });
        }
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caption_length_filter() {
        let blocks = vec![
            "Like".to_string(),
            "A real post about last weekend's trip".to_string(),
            "Share".to_string(),
        ];
        let captions: Vec<_> = blocks
            .into_iter()
            .filter(|text| text.len() > MIN_CAPTION_LEN)
            .collect();
        assert_eq!(captions.len(), 1);
        assert!(captions[0].contains("weekend"));
    }

    #[test]
    fn test_friend_count_text_parsing() {
        assert_eq!(parse::labeled_whole_count("87 friends", "friends"), Some(87));
        assert_eq!(
            parse::labeled_whole_count("See all friends", "friends"),
            None
        );
    }
}
