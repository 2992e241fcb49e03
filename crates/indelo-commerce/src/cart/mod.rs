//! Order draft module.
//!
//! The in-progress order: line aggregation, quantity policies, and pricing.

mod draft;
mod policy;
mod pricing;

pub use draft::{OrderDraft, OrderLine, MAX_QUANTITY_PER_LINE};
pub use policy::QuantityPolicy;
pub use pricing::{DraftPricing, LinePricing};
