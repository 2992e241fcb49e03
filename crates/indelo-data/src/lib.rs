//! Remote-store contracts for Indelo Goods.
//!
//! This crate owns the seams between the client core and its hosted
//! collaborators:
//!
//! - `OrderStore` — async table-CRUD contract for orders and order items
//! - `IdentityProvider` — supplies the current user identity
//! - wire record types that round-trip the store's snake_case JSON
//! - `MemoryOrderStore` — in-memory implementation for tests and local
//!   development
//!
//! Transport (HTTP, auth headers, JSON encoding) belongs to the concrete
//! store implementation; the core only sees these traits.

mod error;
mod identity;
mod memory;
mod records;
mod store;

pub use error::StoreError;
pub use identity::{IdentityProvider, StaticIdentity};
pub use memory::MemoryOrderStore;
pub use records::{NewOrder, NewOrderItem, PersistedOrder, PersistedOrderItem};
pub use store::OrderStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        IdentityProvider, MemoryOrderStore, NewOrder, NewOrderItem, OrderStore, PersistedOrder,
        PersistedOrderItem, StaticIdentity, StoreError,
    };
}
