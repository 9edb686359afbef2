//! Severity tiers for free-text recommendation labels.

use serde::Serialize;

/// Keywords checked in order; the first tier with a match wins.
///
/// Matching is a case-insensitive substring test, so `"Strongly Recommended"`
/// is [`RecommendationTier::Strong`].
pub(crate) const TIER_KEYWORDS: &[(RecommendationTier, &[&str])] = &[
    (RecommendationTier::Strong, &["strong", "excellent", "perfect"]),
    (RecommendationTier::Moderate, &["good", "moderate"]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationTier {
    Strong,
    Moderate,
    Weak,
}

impl std::fmt::Display for RecommendationTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecommendationTier::Strong => write!(f, "strong"),
            RecommendationTier::Moderate => write!(f, "moderate"),
            RecommendationTier::Weak => write!(f, "weak"),
        }
    }
}

/// Classify a recommendation label into a tier.
///
/// Anything without a strong or moderate keyword, including the empty
/// string, is [`RecommendationTier::Weak`].
#[must_use]
pub fn classify_recommendation(label: &str) -> RecommendationTier {
    let lower = label.to_lowercase();
    TIER_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map_or(RecommendationTier::Weak, |(tier, _)| *tier)
}
