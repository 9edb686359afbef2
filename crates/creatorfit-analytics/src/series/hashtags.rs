use std::collections::HashMap;

use creatorfit_core::Post;
use serde::Serialize;

/// Default length of the ranked hashtag table.
pub const HASHTAG_TABLE_LIMIT: usize = 8;
/// Default number of slices in the proportional (pie) view.
pub const HASHTAG_PIE_LIMIT: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HashtagCount {
    /// Tag without its leading `#`.
    pub hashtag: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HashtagShare {
    pub hashtag: String,
    pub count: u64,
    /// Whole-number percent of the summed counts of the slice.
    pub percent: u64,
}

/// Strip a single leading `#`. Case is preserved.
#[must_use]
pub fn normalize_hashtag(tag: &str) -> &str {
    tag.strip_prefix('#').unwrap_or(tag)
}

/// Occurrence count per normalized hashtag, in first-encountered order.
///
/// Tags that are empty after normalization are skipped.
#[must_use]
pub fn count_hashtags(posts: &[Post]) -> Vec<HashtagCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<HashtagCount> = Vec::new();

    for tag in posts.iter().flat_map(|post| post.hashtags.iter()) {
        let tag = normalize_hashtag(tag);
        if tag.is_empty() {
            continue;
        }
        match index.get(tag) {
            Some(&slot) => counts[slot].count += 1,
            None => {
                index.insert(tag, counts.len());
                counts.push(HashtagCount {
                    hashtag: tag.to_string(),
                    count: 1,
                });
            }
        }
    }

    counts
}

/// Hashtags ranked by descending count, truncated to `limit`.
///
/// The sort is stable: equal counts keep first-encountered order. Use
/// [`HASHTAG_TABLE_LIMIT`] for the table and [`HASHTAG_PIE_LIMIT`] for the
/// pie view, or any other length.
#[must_use]
pub fn rank_hashtags(posts: &[Post], limit: usize) -> Vec<HashtagCount> {
    let mut ranked = count_hashtags(posts);
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(limit);
    ranked
}

/// Percent share of each entry within `ranked`, for pie labels.
///
/// Percentages are rounded independently and may not sum to exactly 100.
#[must_use]
pub fn hashtag_shares(ranked: &[HashtagCount]) -> Vec<HashtagShare> {
    let total: u64 = ranked.iter().map(|h| h.count).sum();
    ranked
        .iter()
        .map(|h| HashtagShare {
            hashtag: h.hashtag.clone(),
            count: h.count,
            percent: if total == 0 {
                0
            } else {
                (h.count * 200 + total) / (total * 2)
            },
        })
        .collect()
}

#[cfg(test)]
#[path = "hashtags_test.rs"]
mod tests;
