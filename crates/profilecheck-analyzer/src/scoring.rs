//! Deterministic rule-based scoring.
//!
//! `score_profile` is a pure function: no I/O, no randomness, no clock.
//! The join-date rule needs a notion of "now", so the current year is a
//! parameter supplied by the caller. Rules run in a fixed order; each may
//! shift the score and append an indicator, and the indicator list keeps
//! that evaluation order.

use profilecheck_core::{Impact, Indicator, PictureClassification, ProfileSnapshot};
use regex::Regex;
use std::sync::OnceLock;

/// Every profile starts here; rules push the score up or down.
const BASELINE: i32 = 60;

/// Scores below this are verdicted fake.
const FAKE_THRESHOLD: i32 = 45;

fn trailing_digits_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[a-zA-Z]+[0-9]{4,}").expect("valid regex"))
}

fn generic_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"official|real|original|authentic|\d{6,}").expect("valid regex"))
}

fn join_date_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(January|February|March|April|May|June|July|August|September|October|November|December)\s+(\d{4})",
        )
        .expect("valid regex")
    })
}

/// Score a snapshot. Returns the clamped score in [0, 100] and the
/// contributing indicators in rule-evaluation order.
#[must_use]
#[allow(clippy::too_many_lines, clippy::cast_sign_loss)]
pub fn score_profile(
    snapshot: &ProfileSnapshot,
    picture: &PictureClassification,
    current_year: i32,
) -> (u8, Vec<Indicator>) {
    let mut score = BASELINE;
    let mut indicators = Vec::new();

    // 1. Profile picture
    if snapshot.has_profile_picture {
        // 1a is checked before 1b: a picture classified both human and
        // stock earns the human bonus.
        if picture.is_human {
            score += 10;
            indicators.push(Indicator::new(
                "Profile Picture",
                "Profile has a human photo",
                Impact::Positive,
            ));
        } else if picture.stock_photo {
            score -= 10;
            indicators.push(Indicator::new(
                "Profile Picture",
                "Profile uses a stock photo",
                Impact::Medium,
            ));
        } else {
            score += 5;
            indicators.push(Indicator::new(
                "Profile Picture",
                "Profile has a picture",
                Impact::Positive,
            ));
        }
    } else {
        score -= 15;
        indicators.push(Indicator::new(
            "Profile Picture",
            "No profile picture or default image",
            Impact::High,
        ));
    }

    // 2. Username pattern
    if !snapshot.username.is_empty() && is_suspicious_username(&snapshot.username) {
        score -= 10;
        indicators.push(Indicator::new(
            "Username",
            "Suspicious username pattern",
            Impact::Medium,
        ));
    }

    // 3. Bio
    if snapshot.has_bio {
        score += 5;
        indicators.push(Indicator::new(
            "Bio",
            "Profile has bio information",
            Impact::Positive,
        ));
    } else {
        score -= 5;
        indicators.push(Indicator::new(
            "Bio",
            "Missing bio information",
            Impact::Low,
        ));
    }

    // 4. Post count
    if snapshot.post_count.is_some_and(|count| count < 3) {
        score -= 10;
        indicators.push(Indicator::new("Post Count", "Very few posts", Impact::Medium));
    }

    // 5. Follow ratio (defined only when both counts were extracted)
    if let Some(ratio) = snapshot.follow_ratio {
        let followers = snapshot.followers.unwrap_or(0.0);
        let following = snapshot.following.unwrap_or(0.0);
        if followers < 10.0 && following > 100.0 {
            score -= 15;
            indicators.push(Indicator::new(
                "Follow Ratio",
                "Low followers but following many accounts",
                Impact::High,
            ));
        } else if ratio > 10.0 {
            score -= 10;
            indicators.push(Indicator::new(
                "Follow Ratio",
                "Suspicious follower/following ratio",
                Impact::Medium,
            ));
        }
    }

    // 6. Account age (only when the join date parses to month + year)
    if let Some(join_year) = snapshot.join_date.as_deref().and_then(parse_join_year) {
        if current_year - join_year < 1 {
            score -= 10;
            indicators.push(Indicator::new(
                "Account Age",
                "Recently created account",
                Impact::Medium,
            ));
        } else {
            // Older accounts earn a bonus without an indicator.
            score += 5;
        }
    }

    // 7. Post captions
    match snapshot.post_captions.as_deref() {
        Some(captions) if !captions.is_empty() => {
            score += 5;
            indicators.push(Indicator::new(
                "Post Content",
                "Profile has visible posts",
                Impact::Positive,
            ));

            if captions.iter().any(|caption| is_spammy_caption(caption)) {
                score -= 5;
                indicators.push(Indicator::new(
                    "Post Content",
                    "Excessive hashtags or emojis",
                    Impact::Low,
                ));
            }
        }
        Some(_) => {
            score -= 5;
            indicators.push(Indicator::new(
                "Post Content",
                "No visible posts",
                Impact::Low,
            ));
        }
        None => {}
    }

    // 8. Tagged content (Instagram)
    if snapshot.has_tagged_content == Some(false) {
        score -= 5;
        indicators.push(Indicator::new(
            "Tagged Content",
            "No tagged content",
            Impact::Low,
        ));
    }

    // 9. Friend count (Facebook)
    if snapshot.friend_count.is_some_and(|count| count < 10) {
        score -= 10;
        indicators.push(Indicator::new(
            "Friend Count",
            "Very few friends",
            Impact::Medium,
        ));
    }

    // External links are recorded in the snapshot but deliberately score
    // nothing: off-platform links cut both ways.

    (score.clamp(0, 100) as u8, indicators)
}

/// Verdict: fake iff the score falls below the threshold.
#[must_use]
pub fn is_fake(score: u8) -> bool {
    i32::from(score) < FAKE_THRESHOLD
}

/// Distance-from-threshold confidence, `|45 - score| * 2`.
///
/// Deliberately unclamped: a score of 100 yields 110.
#[must_use]
#[allow(clippy::cast_sign_loss)]
pub fn confidence(score: u8) -> u32 {
    (FAKE_THRESHOLD - i32::from(score)).unsigned_abs() * 2
}

/// Username heuristics: letters followed by a run of 4+ digits, more than
/// two underscores, impersonation keywords, or any 6+ digit run.
fn is_suspicious_username(username: &str) -> bool {
    let trailing_digits = trailing_digits_regex().is_match(username);
    let excessive_underscores = username.matches('_').count() > 2;
    let generic_name = generic_name_regex().is_match(&username.to_lowercase());

    trailing_digits || excessive_underscores || generic_name
}

/// Extract the year from a join-date string like "Joined March 2018".
fn parse_join_year(join_date: &str) -> Option<i32> {
    join_date_regex()
        .captures(join_date)
        .and_then(|caps| caps[2].parse().ok())
}

/// Spam tells: more than 15 hashtag marks or more than 10 emoji characters
/// in a single caption.
fn is_spammy_caption(caption: &str) -> bool {
    let hashtags = caption.matches('#').count();
    let emojis = caption
        .chars()
        .filter(|&c| {
            let cp = c as u32;
            (0x1F300..=0x1F6FF).contains(&cp) || (0x2600..=0x26FF).contains(&cp)
        })
        .count();

    hashtags > 15 || emojis > 10
}
