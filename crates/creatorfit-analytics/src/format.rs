//! Display helpers layered over the raw engine output.
//!
//! Nothing here feeds back into the math; these only turn values into the
//! strings a dashboard shows.

use chrono::{DateTime, Utc};

/// Short chart axis label, e.g. `"Jan 5"`. Falls back to the source text.
#[must_use]
pub fn chart_date_label(date: Option<DateTime<Utc>>, date_text: &str) -> String {
    date.map_or_else(
        || date_text.to_string(),
        |d| d.format("%b %-d").to_string(),
    )
}

/// Table cell date, e.g. `"Jan 5, 24"`. Falls back to the source text.
#[must_use]
pub fn table_date_label(date: Option<DateTime<Utc>>, date_text: &str) -> String {
    date.map_or_else(
        || date_text.to_string(),
        |d| d.format("%b %-d, %y").to_string(),
    )
}

/// Integer with thousands separators, e.g. `12,345`.
#[must_use]
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Views cell: the count, or `-` when the post does not report views.
#[must_use]
pub fn views_cell(views: Option<u64>) -> String {
    views.map_or_else(|| "-".to_string(), format_count)
}

/// First `limit` hashtags plus a `+N` marker for the rest.
#[must_use]
pub fn hashtag_preview(hashtags: &[String], limit: usize) -> (Vec<&str>, Option<String>) {
    let shown = hashtags.iter().take(limit).map(String::as_str).collect();
    let hidden = hashtags.len().saturating_sub(limit);
    let overflow = (hidden > 0).then(|| format!("+{hidden}"));
    (shown, overflow)
}
