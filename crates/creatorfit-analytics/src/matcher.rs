//! Campaign brief matching over a roster of candidate accounts.

use creatorfit_core::{Account, CampaignBrief};

/// Result of running a brief against a roster.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchOutcome<'a> {
    /// Accounts to show: the matches, or the whole roster when nothing matched.
    pub accounts: Vec<&'a Account>,
    /// Number of candidates that satisfied the brief.
    pub matched: usize,
    /// `true` when no candidate matched and `accounts` is the full roster.
    pub fell_back: bool,
}

impl<'a> MatchOutcome<'a> {
    /// The account the dashboard opens on: the first one shown.
    #[must_use]
    pub fn featured(&self) -> Option<&'a Account> {
        self.accounts.first().copied()
    }
}

/// Candidates matching `brief`, in roster order.
///
/// A candidate matches when its niche, target location and product each
/// contain the corresponding brief field, case-insensitively. A candidate
/// missing any of the three never matches. When nothing matches, the entire
/// roster is returned unchanged instead of an empty list.
#[must_use]
pub fn match_campaign<'a>(candidates: &'a [Account], brief: &CampaignBrief) -> Vec<&'a Account> {
    match_outcome(candidates, brief).accounts
}

/// Same as [`match_campaign`], also reporting whether the fallback was used.
//
// The all-candidates fallback makes "nothing fits this brief" look like
// "everything fits". Preserved as-is; callers that need the distinction should
// read `fell_back`.
#[must_use]
pub fn match_outcome<'a>(candidates: &'a [Account], brief: &CampaignBrief) -> MatchOutcome<'a> {
    let niche = brief.niche.to_lowercase();
    let location = brief.target_location.to_lowercase();
    let product = brief.product.to_lowercase();

    let matches: Vec<&Account> = candidates
        .iter()
        .filter(|c| {
            field_contains(c.niche.as_deref(), &niche)
                && field_contains(c.target_location.as_deref(), &location)
                && field_contains(c.product.as_deref(), &product)
        })
        .collect();

    let matched = matches.len();
    tracing::debug!(
        candidates = candidates.len(),
        matched,
        niche = %brief.niche,
        location = %brief.target_location,
        product = %brief.product,
        "evaluated campaign brief"
    );

    if matches.is_empty() {
        tracing::info!(
            candidates = candidates.len(),
            "no candidate matched the brief; showing the full roster"
        );
        return MatchOutcome {
            accounts: candidates.iter().collect(),
            matched: 0,
            fell_back: true,
        };
    }

    MatchOutcome {
        accounts: matches,
        matched,
        fell_back: false,
    }
}

fn field_contains(field: Option<&str>, needle_lower: &str) -> bool {
    field.is_some_and(|value| value.to_lowercase().contains(needle_lower))
}
