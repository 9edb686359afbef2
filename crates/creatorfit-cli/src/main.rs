mod campaign;
mod posts;
mod report;
mod stats;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use creatorfit_analytics::{SortDirection, SortField};
use creatorfit_core::Account;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "creatorfit")]
#[command(about = "Influencer campaign-fit analytics over a candidate roster")]
struct Cli {
    /// Roster file to load instead of the configured one
    #[arg(long, global = true)]
    roster: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print a markdown dashboard for one account
    Report {
        /// Account username; defaults to the first account in the roster
        #[arg(long)]
        username: Option<String>,
    },
    /// Match a campaign brief against the roster
    Match {
        #[arg(long)]
        niche: String,
        #[arg(long)]
        location: String,
        #[arg(long)]
        product: String,
    },
    /// List an account's posts with optional search and sort
    Posts {
        #[arg(long)]
        username: Option<String>,
        /// Case-insensitive text matched against caption, type and hashtags
        #[arg(long, default_value = "")]
        search: String,
        /// date, likes, comments or views
        #[arg(long, default_value = "date")]
        sort: SortField,
        /// asc or desc
        #[arg(long, default_value = "desc")]
        direction: SortDirection,
    },
    /// Show snapshot statistics and export details for one account
    Stats {
        #[arg(long)]
        username: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = creatorfit_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let roster_path = cli.roster.unwrap_or_else(|| config.roster_path.clone());
    tracing::debug!(env = %config.env, roster = %roster_path.display(), "starting");

    let roster = creatorfit_core::load_roster(&roster_path)
        .with_context(|| format!("loading roster from {}", roster_path.display()))?;

    match cli.command {
        Commands::Report { username } => {
            let account = pick_account(&roster, username.as_deref())?;
            report::print_report(account, &config);
        }
        Commands::Match {
            niche,
            location,
            product,
        } => {
            let brief = creatorfit_core::CampaignBrief::new(niche, location, product);
            campaign::run_match(&roster, &brief, &config)?;
        }
        Commands::Posts {
            username,
            search,
            sort,
            direction,
        } => {
            let account = pick_account(&roster, username.as_deref())?;
            posts::print_posts(account, &search, sort, direction, &config);
        }
        Commands::Stats { username } => {
            let account = pick_account(&roster, username.as_deref())?;
            stats::print_stats(account)?;
        }
    }

    Ok(())
}

/// Resolve the account a command operates on.
///
/// # Errors
///
/// Returns an error if the roster is empty or the username is not present.
fn pick_account<'a>(roster: &'a [Account], username: Option<&str>) -> anyhow::Result<&'a Account> {
    creatorfit_core::select_account(roster, username).ok_or_else(|| match username {
        Some(u) => anyhow::anyhow!("account '{u}' not found in roster"),
        None => anyhow::anyhow!("roster is empty; no influencer data found"),
    })
}
