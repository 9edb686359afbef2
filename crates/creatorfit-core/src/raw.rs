//! Loosely-typed account records as the match-finding service emits them.
//!
//! Every field is optional and numeric fields are kept as raw JSON values so
//! that strings, floats and nulls survive deserialization. Conversion to the
//! canonical model happens in [`crate::normalize`].

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawAccount {
    pub overview: Option<RawOverview>,
    /// Some payloads put identity fields at the top level instead of under
    /// `overview`.
    pub full_name: Option<String>,
    pub username: Option<String>,
    pub bio: Option<String>,
    pub platform: Option<String>,
    pub followers: Option<Value>,
    pub niche: Option<String>,
    pub target_location: Option<String>,
    pub product: Option<String>,
    pub avg_likes: Option<Value>,
    pub avg_comments: Option<Value>,
    pub avg_video_views: Option<Value>,
    pub engagement_rate: Option<Value>,
    pub recommendation: Option<String>,
    pub posts: Option<Vec<RawPost>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawOverview {
    pub full_name: Option<String>,
    pub username: Option<String>,
    pub bio: Option<String>,
    pub platform: Option<String>,
    pub followers: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawPost {
    pub id: Option<Value>,
    pub date: Option<String>,
    #[serde(rename = "type")]
    pub post_type: Option<String>,
    pub caption: Option<String>,
    pub likes: Option<Value>,
    pub comments: Option<Value>,
    pub views: Option<Value>,
    pub hashtags: Option<Vec<Value>>,
}
