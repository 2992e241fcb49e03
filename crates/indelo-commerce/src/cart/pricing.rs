//! Draft pricing breakdowns.

use crate::ids::CatalogItemId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Display-ready pricing for an order draft.
///
/// Always built fresh by [`OrderDraft::pricing`]; never cached.
///
/// [`OrderDraft::pricing`]: crate::cart::OrderDraft::pricing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DraftPricing {
    /// Sum of line subtotals.
    pub total: Money,
    /// Number of distinct products.
    pub line_count: usize,
    /// Sum of per-line quantities.
    pub unit_count: i64,
    /// Per-line breakdown, in insertion order.
    pub lines: Vec<LinePricing>,
}

impl DraftPricing {
    /// Check if anything is priced.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Pricing for a single line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinePricing {
    /// Catalog item id.
    pub item_id: CatalogItemId,
    /// Product name at pricing time.
    pub product_name: String,
    /// Effective unit price (retail when published, else wholesale).
    pub unit_price: Money,
    /// Quantity.
    pub quantity: i64,
    /// Subtotal (unit_price × quantity).
    pub subtotal: Money,
}
