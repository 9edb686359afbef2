//! Conversion from [`RawAccount`] / [`RawPost`] to the canonical model.
//!
//! This is the only place defaults are substituted. Nothing here fails: bad
//! numbers become zero or absent, bad dates become an absent timestamp, and
//! each substitution is logged.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

use crate::model::{Account, AccountOverview, Post};
use crate::raw::{RawAccount, RawOverview, RawPost};

const DEFAULT_POST_TYPE: &str = "post";

/// Normalizes a loosely-typed account record into an [`Account`].
#[must_use]
pub fn normalize_account(raw: RawAccount) -> Account {
    let overview = normalize_overview(
        raw.overview.unwrap_or_default(),
        RawOverview {
            full_name: raw.full_name,
            username: raw.username,
            bio: raw.bio,
            platform: raw.platform,
            followers: raw.followers,
        },
    );

    let posts: Vec<Post> = raw
        .posts
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(idx, post)| normalize_post(post, idx))
        .collect();

    tracing::debug!(
        username = overview.handle(),
        posts = posts.len(),
        "normalized account record"
    );

    Account {
        overview,
        niche: raw.niche,
        target_location: raw.target_location,
        product: raw.product,
        avg_likes: coerce_count(raw.avg_likes.as_ref(), "avgLikes"),
        avg_comments: coerce_count(raw.avg_comments.as_ref(), "avgComments"),
        avg_video_views: coerce_count(raw.avg_video_views.as_ref(), "avgVideoViews"),
        engagement_rate: coerce_rate(raw.engagement_rate.as_ref()),
        recommendation: raw.recommendation.filter(|r| !r.trim().is_empty()),
        posts,
    }
}

/// Nested `overview` fields win; top-level fields fill the gaps.
fn normalize_overview(nested: RawOverview, top_level: RawOverview) -> AccountOverview {
    let followers = nested.followers.or(top_level.followers);
    AccountOverview {
        full_name: nested.full_name.or(top_level.full_name),
        username: nested
            .username
            .or(top_level.username)
            .map(|u| u.trim_start_matches('@').to_string()),
        bio: nested.bio.or(top_level.bio),
        platform: nested.platform.or(top_level.platform),
        followers: coerce_count(followers.as_ref(), "followers"),
    }
}

/// Normalizes one post. `index` is the post's position in the source list,
/// used to synthesize an id when none was supplied.
#[must_use]
pub fn normalize_post(raw: RawPost, index: usize) -> Post {
    let id = match raw.id {
        Some(Value::String(s)) if !s.is_empty() => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => format!("post-{index}"),
    };

    let date_text = raw.date.unwrap_or_default();
    let date = parse_post_date(&date_text);
    if date.is_none() && !date_text.is_empty() {
        tracing::warn!(post_id = %id, raw = %date_text, "unrecognized post date; leaving timestamp empty");
    }

    let hashtags = raw
        .hashtags
        .unwrap_or_default()
        .into_iter()
        .filter_map(|tag| match tag {
            Value::String(s) => Some(s),
            _ => None,
        })
        .collect();

    Post {
        likes: coerce_count(raw.likes.as_ref(), "likes").unwrap_or(0),
        comments: coerce_count(raw.comments.as_ref(), "comments").unwrap_or(0),
        views: coerce_count(raw.views.as_ref(), "views"),
        id,
        date,
        date_text,
        post_type: raw
            .post_type
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_POST_TYPE.to_string()),
        caption: raw.caption.unwrap_or_default(),
        hashtags,
    }
}

/// Parses a post date.
///
/// Accepts RFC 3339, a naive `YYYY-MM-DDTHH:MM:SS[.fff]` (taken as UTC) and a
/// bare `YYYY-MM-DD` (midnight UTC). Anything else yields `None`.
#[must_use]
pub fn parse_post_date(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Coerces a raw JSON value to a non-negative integer count.
///
/// Floats round to the nearest integer, numeric strings are parsed, negatives
/// clamp to zero. `null` and missing are `None`; other shapes are logged and
/// treated as `None`.
fn coerce_count(value: Option<&Value>, field: &str) -> Option<u64> {
    let number = match value? {
        Value::Null => return None,
        Value::Number(n) => {
            if let Some(v) = n.as_u64() {
                return Some(v);
            }
            n.as_f64()
        }
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match number {
        Some(v) if v.is_finite() => Some(round_count(v)),
        _ => {
            tracing::warn!(field, value = ?value, "non-numeric count; treating as absent");
            None
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_count(v: f64) -> u64 {
    if v <= 0.0 {
        0
    } else {
        v.round() as u64
    }
}

fn coerce_rate(value: Option<&Value>) -> Option<f64> {
    let rate = match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('%').parse::<f64>().ok(),
        _ => None,
    };
    rate.filter(|r| r.is_finite())
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
