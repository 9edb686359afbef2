//! Searchable, sortable post listing.

use std::cmp::Ordering;
use std::str::FromStr;

use creatorfit_core::Post;
use serde::{Deserialize, Serialize};

use crate::AnalyticsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Date,
    Likes,
    Comments,
    Views,
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortField::Date => write!(f, "date"),
            SortField::Likes => write!(f, "likes"),
            SortField::Comments => write!(f, "comments"),
            SortField::Views => write!(f, "views"),
        }
    }
}

impl FromStr for SortField {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "date" => Ok(SortField::Date),
            "likes" => Ok(SortField::Likes),
            "comments" => Ok(SortField::Comments),
            "views" => Ok(SortField::Views),
            _ => Err(AnalyticsError::InvalidSortField(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(AnalyticsError::InvalidSortDirection(s.to_string())),
        }
    }
}

/// Sort selection held by the caller between renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            field: SortField::Date,
            direction: SortDirection::Desc,
        }
    }
}

impl SortState {
    /// Column-header click: the active field flips direction, any other field
    /// becomes active with direction reset to descending.
    #[must_use]
    pub fn toggle(self, field: SortField) -> Self {
        if self.field == field {
            Self {
                field,
                direction: self.direction.flipped(),
            }
        } else {
            Self {
                field,
                direction: SortDirection::Desc,
            }
        }
    }
}

/// Filter and sort posts for the listing.
///
/// A post is kept when `search_term` appears, case-insensitively, in its
/// caption, its type, or any of its hashtags; an empty term keeps every post.
/// Survivors are sorted by `field` in `direction`. The sort is stable, so
/// posts with equal keys keep their input order in both directions. Absent
/// views sort as 0 and undated posts sort before dated ones.
#[must_use]
pub fn view_posts<'a>(
    posts: &'a [Post],
    search_term: &str,
    field: SortField,
    direction: SortDirection,
) -> Vec<&'a Post> {
    let needle = search_term.to_lowercase();
    let mut rows: Vec<&Post> = posts
        .iter()
        .filter(|post| matches_search(post, &needle))
        .collect();

    rows.sort_by(|a, b| {
        let ord = compare_by(a, b, field);
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
    rows
}

fn matches_search(post: &Post, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    post.caption.to_lowercase().contains(needle)
        || post.post_type.to_lowercase().contains(needle)
        || post
            .hashtags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

fn compare_by(a: &Post, b: &Post, field: SortField) -> Ordering {
    match field {
        SortField::Date => a.date.cmp(&b.date),
        SortField::Likes => a.likes.cmp(&b.likes),
        SortField::Comments => a.comments.cmp(&b.comments),
        SortField::Views => a.views_or_zero().cmp(&b.views_or_zero()),
    }
}

/// Footer line under the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PostTableSummary {
    pub shown: usize,
    pub total: usize,
}

impl std::fmt::Display for PostTableSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Showing {} of {} posts", self.shown, self.total)
    }
}

/// Message for an empty listing. A non-empty search term means the filter
/// removed everything; otherwise there were no posts to begin with.
#[must_use]
pub fn empty_state_message(search_term: &str) -> &'static str {
    if search_term.is_empty() {
        "No posts available."
    } else {
        "No posts found matching your search."
    }
}

#[cfg(test)]
#[path = "table_test.rs"]
mod tests;
