//! Query engine errors

use thiserror::Error;

/// Errors that can occur when building a view
///
/// Every failure rejects the whole operation before any claim is copied;
/// the dataset and any previously computed view are left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Page {requested} is out of range (valid pages: 1..={total_pages})")]
    InvalidPage { requested: usize, total_pages: usize },

    #[error("Page size must be greater than zero")]
    InvalidPageSize,

    #[error("Unknown status filter: {0}")]
    UnknownStatus(String),

    #[error("Unknown claim type filter: {0}")]
    UnknownClaimType(String),

    #[error("Unknown sort column: {0}")]
    UnknownColumn(String),

    #[error("Unknown sort direction: {0}")]
    UnknownDirection(String),
}
