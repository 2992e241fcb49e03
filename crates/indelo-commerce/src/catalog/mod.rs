//! Catalog module.
//!
//! Sellable product definitions with pricing and packaging metadata.

mod item;

pub use item::CatalogItem;
