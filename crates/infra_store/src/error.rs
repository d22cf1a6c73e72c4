//! Store boundary errors

use thiserror::Error;

/// Errors that can occur while loading the claim dataset
///
/// A load failure is the only recoverable error in the system; callers may
/// retry with a different source. A failed load never produces a partial store.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read dataset source: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed dataset document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate claim id: {0}")]
    DuplicateClaimId(String),

    #[error("Invalid claim record {claim_id}: {reason}")]
    InvalidRecord { claim_id: String, reason: String },
}
