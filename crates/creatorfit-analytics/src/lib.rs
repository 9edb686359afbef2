//! Post-analytics derivation engine.
//!
//! Turns an [`Account`](creatorfit_core::Account) and its posts into headline
//! metrics, chart-ready series, a filtered and sorted post listing, and
//! campaign matches over a roster. Every operation is a pure, synchronous
//! function of its inputs: callers hold any UI state (search term, sort
//! order, current brief) and simply call again when it changes.

pub mod error;
pub mod format;
pub mod matcher;
pub mod metrics;
pub mod recommendation;
pub mod series;
pub mod stats;
pub mod table;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::AnalyticsError;
pub use matcher::{match_campaign, match_outcome, MatchOutcome};
pub use metrics::{derive_metrics, estimate_engagement_rate, Metrics, DEFAULT_RECOMMENDATION};
pub use recommendation::{classify_recommendation, RecommendationTier};
pub use series::{
    count_hashtags, engagement_series, hashtag_shares, normalize_hashtag, rank_hashtags,
    views_by_type, EngagementPoint, HashtagCount, HashtagShare, TypeViews, HASHTAG_PIE_LIMIT,
    HASHTAG_TABLE_LIMIT,
};
pub use stats::{account_stats, export_file_name, format_byte_size, AccountStats};
pub use table::{
    empty_state_message, view_posts, PostTableSummary, SortDirection, SortField, SortState,
};
