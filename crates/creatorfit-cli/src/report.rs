//! Markdown dashboard for a single account.

use std::fmt::Write as _;

use creatorfit_analytics::format::{chart_date_label, format_count};
use creatorfit_analytics::{
    derive_metrics, engagement_series, hashtag_shares, rank_hashtags, views_by_type,
};
use creatorfit_core::{Account, AppConfig};

pub(crate) fn print_report(account: &Account, config: &AppConfig) {
    print!(
        "{}",
        render_report(account, config.hashtag_table_limit, config.hashtag_pie_limit)
    );
}

/// Render the dashboard sections as markdown.
pub(crate) fn render_report(account: &Account, table_limit: usize, pie_limit: usize) -> String {
    let mut out = String::new();
    render_profile(&mut out, account);
    render_metrics(&mut out, account);
    render_engagement(&mut out, account);
    render_views_by_type(&mut out, account);
    render_hashtags(&mut out, account, table_limit, pie_limit);
    out
}

fn render_profile(out: &mut String, account: &Account) {
    let overview = &account.overview;
    let followers = overview.followers.map_or_else(|| "0".to_string(), format_count);
    let _ = writeln!(out, "# {} (@{})", overview.display_name(), overview.handle());
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", overview.bio_or_default());
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "**Platform**: {}  \n**Followers**: {followers}",
        overview.platform_or_default()
    );
    let _ = writeln!(out);
}

fn render_metrics(out: &mut String, account: &Account) {
    let metrics = derive_metrics(account);
    let _ = writeln!(out, "## Metrics");
    let _ = writeln!(out);
    let _ = writeln!(out, "| Metric | Value |");
    let _ = writeln!(out, "|--------|-------|");
    let _ = writeln!(
        out,
        "| Recommendation | {} ({}) |",
        metrics.recommendation,
        metrics.recommendation_tier()
    );
    let _ = writeln!(out, "| Avg Likes | {} |", format_count(metrics.avg_likes));
    let _ = writeln!(out, "| Avg Comments | {} |", format_count(metrics.avg_comments));
    let _ = writeln!(out, "| Engagement Rate | {}% |", metrics.engagement_rate);
    let _ = writeln!(
        out,
        "| Avg Video Views | {} |",
        format_count(metrics.avg_video_views)
    );
    let _ = writeln!(out);
}

fn render_engagement(out: &mut String, account: &Account) {
    let _ = writeln!(out, "## Engagement Over Time");
    let _ = writeln!(out);
    let series = engagement_series(&account.posts);
    if series.is_empty() {
        let _ = writeln!(out, "_No posts available._");
        let _ = writeln!(out);
        return;
    }
    let _ = writeln!(out, "| Date | Engagement | Likes | Comments |");
    let _ = writeln!(out, "|------|------------|-------|----------|");
    for point in &series {
        let _ = writeln!(
            out,
            "| {} | {} | {} | {} |",
            chart_date_label(point.date, &point.date_text),
            format_count(point.engagement),
            format_count(point.likes),
            format_count(point.comments)
        );
    }
    let _ = writeln!(out);
}

fn render_views_by_type(out: &mut String, account: &Account) {
    let groups = views_by_type(&account.posts);
    if groups.is_empty() {
        return;
    }
    let _ = writeln!(out, "## Views by Type");
    let _ = writeln!(out);
    let _ = writeln!(out, "| Type | Posts | Total Views | Avg Views |");
    let _ = writeln!(out, "|------|-------|-------------|-----------|");
    for group in &groups {
        let _ = writeln!(
            out,
            "| {} | {} | {} | {} |",
            group.post_type,
            group.count,
            format_count(group.views),
            format_count(group.avg_views)
        );
    }
    let _ = writeln!(out);
}

fn render_hashtags(out: &mut String, account: &Account, table_limit: usize, pie_limit: usize) {
    let ranked = rank_hashtags(&account.posts, table_limit);
    if ranked.is_empty() {
        return;
    }
    let _ = writeln!(out, "## Popular Hashtags");
    let _ = writeln!(out);
    let _ = writeln!(out, "| Hashtag | Count |");
    let _ = writeln!(out, "|---------|-------|");
    for entry in &ranked {
        let _ = writeln!(out, "| #{} | {} |", entry.hashtag, entry.count);
    }
    let _ = writeln!(out);

    let pie = rank_hashtags(&account.posts, pie_limit);
    let shares: Vec<String> = hashtag_shares(&pie)
        .into_iter()
        .map(|s| format!("#{} {}%", s.hashtag, s.percent))
        .collect();
    let _ = writeln!(out, "**Share**: {}", shares.join(", "));
    let _ = writeln!(out);
}
