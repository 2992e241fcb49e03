//! Marketplace domain types and order logic for Indelo Goods.
//!
//! This crate provides the pure, I/O-free core of the Indelo Goods
//! marketplace client:
//!
//! - **Catalog**: sellable products with wholesale/retail pricing and
//!   packaging metadata
//! - **Cart**: the in-progress order draft — line aggregation, quantity
//!   policies, pricing
//! - **Order**: the persisted-order status machine
//!
//! # Example
//!
//! ```rust,ignore
//! use indelo_commerce::prelude::*;
//!
//! let item = CatalogItem::new(
//!     CatalogItemId::new("p1"),
//!     "Rooibos Cold Brew",
//!     Money::from_decimal(12.50, Currency::ZAR),
//! );
//!
//! let mut draft = OrderDraft::new(QuantityPolicy::PerUnit);
//! draft.add(&item, 2)?;
//!
//! let pricing = draft.pricing()?;
//! println!("Total: {}", pricing.total.display());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod order;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};
pub use order::OrderStatus;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::CatalogItem;

    // Cart
    pub use crate::cart::{DraftPricing, LinePricing, OrderDraft, OrderLine, QuantityPolicy};

    // Order
    pub use crate::order::OrderStatus;
}
