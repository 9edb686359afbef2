//! Campaign brief matching command.

use creatorfit_analytics::{derive_metrics, match_outcome, MatchOutcome};
use creatorfit_core::{Account, AppConfig, CampaignBrief};

use crate::report;

/// Run the matcher and print the shortlist followed by the featured account's
/// dashboard.
///
/// # Errors
///
/// Returns an error if any brief field is blank.
pub(crate) fn run_match(
    roster: &[Account],
    brief: &CampaignBrief,
    config: &AppConfig,
) -> anyhow::Result<()> {
    if !brief.is_complete() {
        anyhow::bail!("niche, location and product are all required");
    }

    let outcome = match_outcome(roster, brief);
    print!("{}", render_shortlist(&outcome));

    match outcome.featured() {
        Some(account) => {
            println!();
            report::print_report(account, config);
        }
        None => println!("no influencer data found"),
    }
    Ok(())
}

pub(crate) fn render_shortlist(outcome: &MatchOutcome<'_>) -> String {
    let mut out = String::new();
    if outcome.fell_back {
        out.push_str("no candidate matched every field; showing the full roster\n");
    } else {
        out.push_str(&format!("{} matching candidate(s)\n", outcome.matched));
    }

    out.push_str(&format!(
        "{:<20}{:<18}{:<18}{:<18}{:<16}\n",
        "USERNAME", "NICHE", "LOCATION", "PRODUCT", "RECOMMENDATION"
    ));
    for account in &outcome.accounts {
        let metrics = derive_metrics(account);
        out.push_str(&format!(
            "{:<20}{:<18}{:<18}{:<18}{:<16}\n",
            account.overview.handle(),
            account.niche.as_deref().unwrap_or("-"),
            account.target_location.as_deref().unwrap_or("-"),
            account.product.as_deref().unwrap_or("-"),
            metrics.recommendation
        ));
    }
    out
}
