use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One published item from an account's feed, in canonical form.
///
/// Produced by [`crate::normalize::normalize_post`]; every field is populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Opaque identifier. The only identity key for a post.
    pub id: String,
    /// Parsed publication instant, or `None` when the source text was not a
    /// recognizable date.
    pub date: Option<DateTime<Utc>>,
    /// The date exactly as the source supplied it.
    pub date_text: String,
    /// Open-ended content type tag, e.g. `"post"`, `"reel"`, `"story"`.
    #[serde(rename = "type")]
    pub post_type: String,
    pub caption: String,
    pub likes: u64,
    pub comments: u64,
    /// Not every post type reports views.
    pub views: Option<u64>,
    /// Hashtags as supplied, with or without a leading `#`.
    pub hashtags: Vec<String>,
}

impl Post {
    /// Likes plus comments.
    #[must_use]
    pub fn engagement(&self) -> u64 {
        self.likes.saturating_add(self.comments)
    }

    /// Views with absent counted as zero. Only for ordering and per-type totals.
    #[must_use]
    pub fn views_or_zero(&self) -> u64 {
        self.views.unwrap_or(0)
    }
}

/// Descriptive identity of an account. Never used in derivation math.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountOverview {
    pub full_name: Option<String>,
    pub username: Option<String>,
    pub bio: Option<String>,
    pub platform: Option<String>,
    pub followers: Option<u64>,
}

impl AccountOverview {
    #[must_use]
    pub fn display_name(&self) -> &str {
        non_blank(self.full_name.as_deref()).unwrap_or("Unknown")
    }

    /// Username without the `@`, or `"unknown"`.
    #[must_use]
    pub fn handle(&self) -> &str {
        non_blank(self.username.as_deref()).unwrap_or("unknown")
    }

    #[must_use]
    pub fn bio_or_default(&self) -> &str {
        non_blank(self.bio.as_deref()).unwrap_or("No bio available")
    }

    #[must_use]
    pub fn platform_or_default(&self) -> &str {
        non_blank(self.platform.as_deref()).unwrap_or("Unknown Platform")
    }

    /// First letter of the full name, upper-cased, for the avatar badge.
    #[must_use]
    pub fn avatar_initial(&self) -> char {
        non_blank(self.full_name.as_deref())
            .and_then(|name| name.chars().next())
            .and_then(|c| c.to_uppercase().next())
            .unwrap_or('U')
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// The account under analysis, together with its posts.
///
/// The `avg_*`, `engagement_rate` and `recommendation` fields carry values
/// precomputed upstream. When present they are authoritative and the metrics
/// engine must report them unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub overview: AccountOverview,
    pub niche: Option<String>,
    pub target_location: Option<String>,
    pub product: Option<String>,
    pub avg_likes: Option<u64>,
    pub avg_comments: Option<u64>,
    pub avg_video_views: Option<u64>,
    pub engagement_rate: Option<f64>,
    pub recommendation: Option<String>,
    /// Source order; not assumed chronological.
    pub posts: Vec<Post>,
}

/// Search criteria submitted for a campaign.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignBrief {
    pub niche: String,
    pub target_location: String,
    pub product: String,
}

impl CampaignBrief {
    #[must_use]
    pub fn new(
        niche: impl Into<String>,
        target_location: impl Into<String>,
        product: impl Into<String>,
    ) -> Self {
        Self {
            niche: niche.into(),
            target_location: target_location.into(),
            product: product.into(),
        }
    }

    /// Returns `true` when all three fields have non-whitespace content.
    ///
    /// Callers gate submission on this; the matcher does not check it.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        [&self.niche, &self.target_location, &self.product]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}
