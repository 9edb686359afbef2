//! Chart-ready projections over an account's posts.
//!
//! Three independent views: engagement over time, average views per post type,
//! and hashtag frequency ranking. Display formatting lives in
//! [`crate::format`]; these types carry raw values only.

mod engagement;
mod hashtags;
mod post_types;

pub use engagement::{engagement_series, EngagementPoint};
pub use hashtags::{
    count_hashtags, hashtag_shares, normalize_hashtag, rank_hashtags, HashtagCount, HashtagShare,
    HASHTAG_PIE_LIMIT, HASHTAG_TABLE_LIMIT,
};
pub use post_types::{views_by_type, TypeViews};
