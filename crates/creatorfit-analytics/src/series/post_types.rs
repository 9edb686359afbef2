use std::collections::HashMap;

use creatorfit_core::Post;
use serde::Serialize;

use crate::metrics::rounded_mean;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeViews {
    #[serde(rename = "type")]
    pub post_type: String,
    /// Total views across the group, absent views counted as zero.
    pub views: u64,
    pub count: u64,
    /// `views / count`, rounded.
    pub avg_views: u64,
}

/// Average views per post type.
///
/// Groups appear in the order their type is first seen in `posts`. Type tags
/// are compared exactly. Posts without views still count toward `count`, so a
/// group with no reporting posts has `avg_views` of 0.
#[must_use]
pub fn views_by_type(posts: &[Post]) -> Vec<TypeViews> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<u64>)> = Vec::new();

    for post in posts {
        let slot = *index.entry(post.post_type.as_str()).or_insert_with(|| {
            groups.push((post.post_type.as_str(), Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(post.views_or_zero());
    }

    groups
        .into_iter()
        .map(|(post_type, views)| TypeViews {
            post_type: post_type.to_string(),
            views: views.iter().fold(0_u64, |acc, v| acc.saturating_add(*v)),
            count: views.len() as u64,
            avg_views: rounded_mean(views.into_iter()),
        })
        .collect()
}
