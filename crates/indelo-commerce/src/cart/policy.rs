//! Default-quantity policies for new order lines.

use crate::catalog::CatalogItem;
use serde::{Deserialize, Serialize};

/// Decides the starting quantity when a catalog item first enters a draft.
///
/// The consumer cart and the shop-side wholesale order share one aggregator
/// parameterized by this policy instead of duplicating the merge logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum QuantityPolicy {
    /// Consumer cart: a new line starts at the requested quantity.
    #[default]
    PerUnit,
    /// Wholesale order: a new line starts at no less than the item's
    /// minimum order quantity.
    MinimumOrder,
}

impl QuantityPolicy {
    /// Starting quantity for a brand-new line.
    pub fn initial_quantity(&self, item: &CatalogItem, requested: i64) -> i64 {
        match self {
            QuantityPolicy::PerUnit => requested,
            QuantityPolicy::MinimumOrder => requested.max(item.min_order_quantity),
        }
    }
}
