//! Submission error types.

use indelo_commerce::CommerceError;
use indelo_data::StoreError;
use thiserror::Error;

/// Errors produced by order submission.
///
/// Validation and authentication errors are detected locally and never
/// reach the remote store; remote errors carry the collaborator's message
/// unparsed.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// No target shop on the draft. Detected before any write.
    #[error("No shop selected for this order")]
    MissingShop,

    /// The draft has no lines. Detected before any write.
    #[error("Cannot submit an empty order")]
    EmptyOrder,

    /// No signed-in user. Detected before any write.
    #[error("Not signed in")]
    NotAuthenticated,

    /// Local domain failure while pricing or snapshotting the draft.
    #[error(transparent)]
    Domain(#[from] CommerceError),

    /// A remote write failed.
    #[error(transparent)]
    Remote(#[from] StoreError),
}

impl SubmitError {
    /// Whether this error was raised before any remote call.
    pub fn is_local(&self) -> bool {
        !matches!(self, SubmitError::Remote(_))
    }
}
