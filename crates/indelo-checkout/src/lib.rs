//! Order submission for Indelo Goods.
//!
//! Turns an in-memory [`OrderDraft`] into a persisted order plus item
//! snapshots via two dependent remote writes, and owns the failure
//! contract between them:
//!
//! - header write fails → nothing persisted, draft untouched
//! - an item write fails after the header → error surfaced, no rollback,
//!   draft untouched (the partial-failure window)
//! - full success → draft cleared, "order placed" signal latched once
//!
//! [`OrderDraft`]: indelo_commerce::cart::OrderDraft

mod coordinator;
mod error;
mod signal;
mod state;

pub use coordinator::{SubmissionCoordinator, SubmissionReceipt};
pub use error::SubmitError;
pub use signal::PlacedSignal;
pub use state::SubmissionState;
