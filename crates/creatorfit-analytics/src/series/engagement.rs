use chrono::{DateTime, Utc};
use creatorfit_core::Post;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementPoint {
    pub post_id: String,
    pub date: Option<DateTime<Utc>>,
    /// Source date text, for labelling points whose date did not parse.
    pub date_text: String,
    /// `likes + comments`.
    pub engagement: u64,
    pub likes: u64,
    pub comments: u64,
}

/// Per-post engagement in ascending date order.
///
/// Posts with an unparseable date sort first. Posts sharing a timestamp keep
/// their source order.
#[must_use]
pub fn engagement_series(posts: &[Post]) -> Vec<EngagementPoint> {
    let mut points: Vec<EngagementPoint> = posts
        .iter()
        .map(|post| EngagementPoint {
            post_id: post.id.clone(),
            date: post.date,
            date_text: post.date_text.clone(),
            engagement: post.engagement(),
            likes: post.likes,
            comments: post.comments,
        })
        .collect();
    points.sort_by_key(|point| point.date);
    points
}
