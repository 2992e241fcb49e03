//! Persisted-order module.
//!
//! Status machine for orders that live in the remote store.

mod status;

pub use status::OrderStatus;
