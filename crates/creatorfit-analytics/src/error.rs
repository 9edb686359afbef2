use thiserror::Error;

/// Parsing failures for caller-supplied view parameters.
///
/// The derivation functions themselves never fail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalyticsError {
    #[error("unknown sort field \"{0}\"; expected date, likes, comments or views")]
    InvalidSortField(String),

    #[error("unknown sort direction \"{0}\"; expected asc or desc")]
    InvalidSortDirection(String),
}
