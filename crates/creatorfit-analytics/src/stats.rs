//! Snapshot statistics shown alongside the raw record export.

use creatorfit_core::Account;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountStats {
    pub posts: usize,
    /// Total hashtag entries across all posts, duplicates included.
    pub hashtags: usize,
    pub total_likes: u64,
    pub total_comments: u64,
}

#[must_use]
pub fn account_stats(account: &Account) -> AccountStats {
    let posts = &account.posts;
    AccountStats {
        posts: posts.len(),
        hashtags: posts.iter().map(|p| p.hashtags.len()).sum(),
        total_likes: posts.iter().fold(0_u64, |acc, p| acc.saturating_add(p.likes)),
        total_comments: posts.iter().fold(0_u64, |acc, p| acc.saturating_add(p.comments)),
    }
}

/// `"512 bytes"` under 1 KiB, otherwise kilobytes with one decimal.
#[must_use]
pub fn format_byte_size(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{bytes} bytes")
    } else {
        #[allow(clippy::cast_precision_loss)]
        let kb = bytes as f64 / 1024.0;
        format!("{kb:.1} KB")
    }
}

/// File name offered when exporting an account record.
#[must_use]
pub fn export_file_name(account: &Account) -> String {
    let stem = account
        .overview
        .username
        .as_deref()
        .filter(|u| !u.trim().is_empty())
        .unwrap_or("export");
    format!("influencer-data-{stem}.json")
}
