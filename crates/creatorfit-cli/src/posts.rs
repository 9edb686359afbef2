//! Post listing command.

use std::fmt::Write as _;

use creatorfit_analytics::format::{format_count, hashtag_preview, table_date_label, views_cell};
use creatorfit_analytics::{
    empty_state_message, view_posts, PostTableSummary, SortDirection, SortField,
};
use creatorfit_core::{Account, AppConfig};

pub(crate) fn print_posts(
    account: &Account,
    search: &str,
    sort: SortField,
    direction: SortDirection,
    config: &AppConfig,
) {
    print!(
        "{}",
        render_posts(account, search, sort, direction, config.post_hashtag_preview)
    );
}

pub(crate) fn render_posts(
    account: &Account,
    search: &str,
    sort: SortField,
    direction: SortDirection,
    hashtag_limit: usize,
) -> String {
    let rows = view_posts(&account.posts, search, sort, direction);
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{:<14}{:<10}{:<12}{:>10}{:>10}{:>10}  HASHTAGS",
        "ID", "TYPE", "DATE", "LIKES", "COMMENTS", "VIEWS"
    );
    for post in &rows {
        let (shown, overflow) = hashtag_preview(&post.hashtags, hashtag_limit);
        let mut tags = shown.join(" ");
        if let Some(more) = overflow {
            tags.push(' ');
            tags.push_str(&more);
        }
        let _ = writeln!(
            out,
            "{:<14}{:<10}{:<12}{:>10}{:>10}{:>10}  {}",
            post.id,
            post.post_type,
            table_date_label(post.date, &post.date_text),
            format_count(post.likes),
            format_count(post.comments),
            views_cell(post.views),
            tags
        );
    }

    if rows.is_empty() {
        let _ = writeln!(out, "{}", empty_state_message(search));
    }

    let summary = PostTableSummary {
        shown: rows.len(),
        total: account.posts.len(),
    };
    let _ = writeln!(out, "{summary} (sorted by {sort} {direction})");
    out
}
