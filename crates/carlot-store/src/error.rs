//! Store errors.

use thiserror::Error;

/// Store error types.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to open the database file.
    #[error("failed to open database: {0}")]
    Open(String),

    /// A statement against the cars table failed. Carries the driver
    /// message verbatim so callers can surface it unchanged.
    #[error("{0}")]
    Statement(String),
}
