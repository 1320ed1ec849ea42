//! Free-text number parsing for profile statistics.
//!
//! Platforms render counts as text ("1,234 followers", "42 posts"). Parsing
//! strips thousands separators and accepts decimals; abbreviated counts
//! that were not pre-expanded upstream ("1.2K followers") yield the literal
//! leading number only.

use regex::Regex;
use std::sync::OnceLock;

fn count_regex() -> &'static Regex {
    static COUNT_RE: OnceLock<Regex> = OnceLock::new();
    COUNT_RE.get_or_init(|| {
        Regex::new(r"(?i)(\d+(?:[.,]\d+)*)\s*(followers|following|posts|friends)")
            .expect("valid regex")
    })
}

fn number_regex() -> &'static Regex {
    static NUMBER_RE: OnceLock<Regex> = OnceLock::new();
    NUMBER_RE.get_or_init(|| Regex::new(r"\d+(?:[.,]\d+)*").expect("valid regex"))
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.replace(',', "").parse().ok()
}

/// Extract the number attached to a statistic label ("followers",
/// "following", "posts", "friends") from free text.
///
/// A number directly before the label wins; when the label is present but
/// its number is abbreviated or separated ("1.2K followers"), the literal
/// leading number of the text is used instead.
#[must_use]
pub fn labeled_count(text: &str, label: &str) -> Option<f64> {
    for caps in count_regex().captures_iter(text) {
        if caps[2].eq_ignore_ascii_case(label) {
            return parse_number(&caps[1]);
        }
    }

    if text.to_ascii_lowercase().contains(label) {
        if let Some(m) = number_regex().find(text) {
            return parse_number(m.as_str());
        }
    }
    None
}

/// Like [`labeled_count`] but truncated to a whole count, for statistics
/// that are never fractional (posts, friends).
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn labeled_whole_count(text: &str, label: &str) -> Option<u32> {
    labeled_count(text, label).map(|n| n.max(0.0) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_count() {
        assert_eq!(labeled_count("500 followers", "followers"), Some(500.0));
        assert_eq!(labeled_count("200 following", "following"), Some(200.0));
    }

    #[test]
    fn test_thousands_separator_stripped() {
        assert_eq!(labeled_count("1,234 followers", "followers"), Some(1234.0));
        assert_eq!(
            labeled_count("12,345,678 followers", "followers"),
            Some(12_345_678.0)
        );
    }

    #[test]
    fn test_abbreviated_count_yields_leading_number() {
        // "1.2K" not pre-expanded: the literal leading number is kept.
        assert_eq!(labeled_count("1.2K followers", "followers"), Some(1.2));
    }

    #[test]
    fn test_label_mismatch() {
        assert_eq!(labeled_count("500 followers", "following"), None);
        assert_eq!(labeled_count("no stats here", "followers"), None);
    }

    #[test]
    fn test_case_insensitive_label() {
        assert_eq!(labeled_count("1,234 Followers", "followers"), Some(1234.0));
        assert_eq!(labeled_count("400 Following", "following"), Some(400.0));
    }

    #[test]
    fn test_multiple_labels_in_one_text() {
        let text = "42 posts 500 followers 200 following";
        assert_eq!(labeled_whole_count(text, "posts"), Some(42));
        assert_eq!(labeled_count(text, "followers"), Some(500.0));
        assert_eq!(labeled_count(text, "following"), Some(200.0));
    }

    #[test]
    fn test_whole_count() {
        assert_eq!(labeled_whole_count("87 friends", "friends"), Some(87));
        assert_eq!(labeled_whole_count("1,024 posts", "posts"), Some(1024));
    }
}
