//! Headline metrics for one account.

use creatorfit_core::Account;
use serde::Serialize;

use crate::recommendation::{classify_recommendation, RecommendationTier};

/// Label reported when the account carries no recommendation of its own.
pub const DEFAULT_RECOMMENDATION: &str = "Strong Fit";

/// Stand-in audience size floor for [`estimate_engagement_rate`].
const ENGAGEMENT_DENOMINATOR_FLOOR: f64 = 1000.0;
/// Assumed followers per average like for [`estimate_engagement_rate`].
const FOLLOWERS_PER_LIKE: f64 = 20.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub avg_likes: u64,
    pub avg_comments: u64,
    pub avg_video_views: u64,
    /// Percent, two decimal places.
    pub engagement_rate: f64,
    pub recommendation: String,
}

impl Metrics {
    #[must_use]
    pub fn recommendation_tier(&self) -> RecommendationTier {
        classify_recommendation(&self.recommendation)
    }
}

/// Derive headline metrics for an account.
///
/// Values precomputed upstream are reported as-is. Missing ones are derived
/// from the posts: means are rounded to the nearest integer, the video-views
/// mean only counts posts that report views, and every empty case is zero.
#[must_use]
pub fn derive_metrics(account: &Account) -> Metrics {
    let posts = &account.posts;

    let avg_likes = account
        .avg_likes
        .unwrap_or_else(|| rounded_mean(posts.iter().map(|p| p.likes)));
    let avg_comments = account
        .avg_comments
        .unwrap_or_else(|| rounded_mean(posts.iter().map(|p| p.comments)));
    let avg_video_views = account
        .avg_video_views
        .unwrap_or_else(|| rounded_mean(posts.iter().filter_map(|p| p.views)));

    let engagement_rate = account
        .engagement_rate
        .unwrap_or_else(|| estimate_engagement_rate(avg_likes, avg_comments));

    let recommendation = account
        .recommendation
        .clone()
        .unwrap_or_else(|| DEFAULT_RECOMMENDATION.to_string());

    Metrics {
        avg_likes,
        avg_comments,
        avg_video_views,
        engagement_rate,
        recommendation,
    }
}

/// Heuristic engagement rate, in percent, rounded to two decimals.
///
/// This is not a true engagement rate: the real follower count is not used.
/// The denominator guesses an audience of twenty followers per average like,
/// floored at 1000. Kept for compatibility with existing dashboards; treat the
/// number as a relative signal only.
#[must_use]
pub fn estimate_engagement_rate(avg_likes: u64, avg_comments: u64) -> f64 {
    let interactions = avg_likes.saturating_add(avg_comments);
    if interactions == 0 {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let (interactions, avg_likes) = (interactions as f64, avg_likes as f64);
    let denominator = (avg_likes * FOLLOWERS_PER_LIKE).max(ENGAGEMENT_DENOMINATOR_FLOOR);
    round_to_hundredths(interactions / denominator * 100.0)
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Arithmetic mean rounded half-up, computed in integers. Empty input is 0.
pub(crate) fn rounded_mean(values: impl Iterator<Item = u64>) -> u64 {
    let (sum, count) = values.fold((0_u128, 0_u128), |(sum, count), v| {
        (sum + u128::from(v), count + 1)
    });
    if count == 0 {
        return 0;
    }
    u64::try_from((sum * 2 + count) / (count * 2)).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{make_account, make_post};

    #[test]
    fn empty_posts_yield_zero_metrics_and_default_label() {
        let metrics = derive_metrics(&make_account(vec![]));
        assert_eq!(metrics.avg_likes, 0);
        assert_eq!(metrics.avg_comments, 0);
        assert_eq!(metrics.avg_video_views, 0);
        assert!(metrics.engagement_rate.abs() < f64::EPSILON);
        assert_eq!(metrics.recommendation, "Strong Fit");
        assert_eq!(metrics.recommendation_tier(), RecommendationTier::Strong);
    }

    #[test]
    fn means_over_likes_and_comments() {
        let account = make_account(vec![make_post("a", 10, 2, None), make_post("b", 20, 4, None)]);
        let metrics = derive_metrics(&account);
        assert_eq!(metrics.avg_likes, 15);
        assert_eq!(metrics.avg_comments, 3);
    }

    #[test]
    fn means_round_half_up() {
        let account = make_account(vec![make_post("a", 1, 0, None), make_post("b", 2, 1, None)]);
        let metrics = derive_metrics(&account);
        // 1.5 -> 2, 0.5 -> 1
        assert_eq!(metrics.avg_likes, 2);
        assert_eq!(metrics.avg_comments, 1);
    }

    #[test]
    fn video_views_mean_excludes_absent_views() {
        let account = make_account(vec![
            make_post("a", 0, 0, Some(100)),
            make_post("b", 0, 0, None),
            make_post("c", 0, 0, Some(300)),
        ]);
        assert_eq!(derive_metrics(&account).avg_video_views, 200);
    }

    #[test]
    fn video_views_zero_when_no_post_reports_views() {
        let account = make_account(vec![make_post("a", 5, 1, None)]);
        assert_eq!(derive_metrics(&account).avg_video_views, 0);
    }

    #[test]
    fn precomputed_values_are_authoritative() {
        let mut account = make_account(vec![make_post("a", 10, 2, Some(50))]);
        account.avg_likes = Some(999);
        account.avg_comments = Some(0);
        account.avg_video_views = Some(12345);
        account.engagement_rate = Some(7.25);
        account.recommendation = Some("Moderate Fit".to_string());

        let metrics = derive_metrics(&account);
        assert_eq!(metrics.avg_likes, 999);
        assert_eq!(metrics.avg_comments, 0);
        assert_eq!(metrics.avg_video_views, 12345);
        assert!((metrics.engagement_rate - 7.25).abs() < f64::EPSILON);
        assert_eq!(metrics.recommendation, "Moderate Fit");
        assert_eq!(metrics.recommendation_tier(), RecommendationTier::Moderate);
    }

    #[test]
    fn derived_engagement_uses_precomputed_averages() {
        let mut account = make_account(vec![make_post("a", 1, 1, None)]);
        account.avg_likes = Some(100);
        account.avg_comments = Some(20);
        // 120 / max(2000, 1000) * 100
        assert!((derive_metrics(&account).engagement_rate - 6.0).abs() < 1e-9);
    }

    #[test]
    fn engagement_rate_uses_floor_for_small_accounts() {
        // 18 / 1000 * 100
        assert!((estimate_engagement_rate(15, 3) - 1.8).abs() < 1e-9);
    }

    #[test]
    fn engagement_rate_scales_with_likes() {
        // 1050 / 20000 * 100
        assert!((estimate_engagement_rate(1000, 50) - 5.25).abs() < 1e-9);
    }

    #[test]
    fn engagement_rate_rounds_to_two_decimals() {
        // 7 / 1000 * 100 = 0.7; 1234 / 24680 * 100 = 5.0
        assert!((estimate_engagement_rate(0, 7) - 0.7).abs() < 1e-9);
        assert!((estimate_engagement_rate(1234, 0) - 5.0).abs() < 1e-9);
        // 2 / 1000 * 100 = 0.2; 1 / 1000 * 100 = 0.1
        assert!((estimate_engagement_rate(1, 1) - 0.2).abs() < 1e-9);
        // 1001 / 20000 * 100 = 5.005 -> two decimals
        let rate = estimate_engagement_rate(1000, 1);
        assert!((rate * 100.0 - (rate * 100.0).round()).abs() < 1e-9, "{rate}");
    }

    #[test]
    fn engagement_rate_zero_without_interactions() {
        assert!(estimate_engagement_rate(0, 0).abs() < f64::EPSILON);
    }

    #[test]
    fn rounded_mean_empty_is_zero() {
        assert_eq!(rounded_mean(std::iter::empty()), 0);
    }

    #[test]
    fn rounded_mean_handles_large_values() {
        assert_eq!(rounded_mean([u64::MAX, u64::MAX].into_iter()), u64::MAX);
    }
}
