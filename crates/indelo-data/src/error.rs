//! Store error types.

use thiserror::Error;

/// Errors surfaced by the remote store.
///
/// Remote failures arrive as human-readable messages from the collaborator;
/// they are carried opaquely and never parsed or classified further here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A write (insert/update) was rejected or lost.
    #[error("Remote write failed: {0}")]
    Write(String),

    /// The requested record does not exist.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A status update violated the order lifecycle.
    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },
}
