//! The extraction capability interface and shared fail-soft page queries.

use crate::error::Result;
use crate::{FacebookExtractor, InstagramExtractor, TwitterExtractor};
use chromiumoxide::page::Page;
use profilecheck_core::{Platform, ProfileSnapshot};
use std::time::Duration;

/// Delay after dismissing an overlay, giving the page time to re-render.
const DISMISS_SETTLE: Duration = Duration::from_millis(1000);

/// Capability interface for platform-specific profile extraction.
///
/// Implementations only read page state, never mutate it (overlay dismissal
/// aside), so one `Page` can safely serve all field queries of a request.
#[async_trait::async_trait]
pub trait ProfileExtractor: Send + Sync {
    /// Platform this adapter understands.
    fn platform(&self) -> Platform;

    /// Produce a normalized snapshot from a rendered profile page.
    async fn extract(&self, page: &Page) -> Result<ProfileSnapshot>;
}

/// Select the adapter for a platform tag.
#[must_use]
pub fn extractor_for(platform: Platform) -> Box<dyn ProfileExtractor> {
    match platform {
        Platform::Facebook => Box::new(FacebookExtractor),
        Platform::Instagram => Box::new(InstagramExtractor),
        Platform::Twitter => Box::new(TwitterExtractor),
    }
}

/// Inner text of the first element matching `selector`, trimmed.
/// `None` on a selector miss or empty text.
pub(crate) async fn query_text(page: &Page, selector: &str) -> Option<String> {
    let element = page.find_element(selector).await.ok()?;
    element
        .inner_text()
        .await
        .ok()
        .flatten()
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

/// Attribute value of the first element matching `selector`.
pub(crate) async fn query_attr(page: &Page, selector: &str, attribute: &str) -> Option<String> {
    let element = page.find_element(selector).await.ok()?;
    element.attribute(attribute).await.ok().flatten()
}

/// Trimmed, non-empty inner texts of all elements matching `selector`,
/// in document order.
pub(crate) async fn query_all_texts(page: &Page, selector: &str) -> Vec<String> {
    let Ok(elements) = page.find_elements(selector).await else {
        return Vec::new();
    };

    let mut texts = Vec::new();
    for element in elements {
        if let Ok(Some(text)) = element.inner_text().await {
            let text = text.trim().to_string();
            if !text.is_empty() {
                texts.push(text);
            }
        }
    }
    texts
}

/// Whether any element matches `selector`.
pub(crate) async fn element_exists(page: &Page, selector: &str) -> bool {
    page.find_element(selector).await.is_ok()
}

/// Whether the page links anywhere off-platform.
pub(crate) async fn detect_external_links(page: &Page, platform: Platform) -> bool {
    let Ok(anchors) = page.find_elements(r#"a[href*="http"]"#).await else {
        return false;
    };

    for anchor in anchors {
        if let Ok(Some(href)) = anchor.attribute("href").await {
            if platform.own_domains().iter().all(|d| !href.contains(d)) {
                return true;
            }
        }
    }
    false
}

/// Decide picture presence from an image element's address.
///
/// A picture counts only if the element was found and its address does not
/// match the platform's placeholder pattern. The raw address is kept either
/// way so the response shows what was on the page.
pub(crate) fn picture_presence(
    src: Option<String>,
    placeholder: &str,
) -> (bool, Option<String>) {
    match src {
        Some(src) => {
            let has_picture = !src.contains(placeholder);
            (has_picture, Some(src))
        }
        None => (false, None),
    }
}

/// Dismiss a login/consent overlay through its close button.
///
/// Dismissal failure is non-fatal; extraction continues against whatever
/// remains visible.
pub(crate) async fn dismiss_via_close_button(
    page: &Page,
    dialog_selector: &str,
    close_selector: &str,
) {
    if !element_exists(page, dialog_selector).await {
        return;
    }
    tracing::debug!(dialog_selector, "Login overlay detected, dismissing");

    match page.find_element(close_selector).await {
        Ok(button) => {
            if let Err(e) = button.click().await {
                tracing::warn!("Could not dismiss overlay: {}", e);
            } else {
                tokio::time::sleep(DISMISS_SETTLE).await;
            }
        }
        Err(_) => tracing::debug!("Overlay has no close button, continuing"),
    }
}

/// Dismiss a login overlay by clicking outside it (Instagram-style modals
/// close on any outside click).
pub(crate) async fn dismiss_via_outside_click(page: &Page, dialog_selector: &str) {
    if !element_exists(page, dialog_selector).await {
        return;
    }
    tracing::debug!(dialog_selector, "Login overlay detected, clicking outside");

    let click_outside = "document.elementFromPoint(10, 10)\
        ?.dispatchEvent(new MouseEvent('click', {bubbles: true}))";
    if let Err(e) = page.evaluate(click_outside).await {
        tracing::warn!("Could not dismiss overlay: {}", e);
    } else {
        tokio::time::sleep(DISMISS_SETTLE).await;
    }
}
