//! Snapshot statistics for the raw record export.

use creatorfit_analytics::{account_stats, export_file_name, format_byte_size};
use creatorfit_core::Account;

/// # Errors
///
/// Returns an error if the account cannot be serialized.
pub(crate) fn print_stats(account: &Account) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(account)?;
    let stats = account_stats(account);

    println!("{:<16}{}", "ACCOUNT", account.overview.handle());
    println!("{:<16}{}", "POSTS", stats.posts);
    println!("{:<16}{}", "HASHTAGS", stats.hashtags);
    println!("{:<16}{}", "TOTAL LIKES", stats.total_likes);
    println!("{:<16}{}", "TOTAL COMMENTS", stats.total_comments);
    println!("{:<16}{}", "JSON SIZE", format_byte_size(json.len()));
    println!("{:<16}{}", "EXPORT FILE", export_file_name(account));
    Ok(())
}
