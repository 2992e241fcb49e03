//! Order draft and line types.

use crate::cart::{DraftPricing, LinePricing, QuantityPolicy};
use crate::catalog::CatalogItem;
use crate::error::CommerceError;
use crate::ids::{CatalogItemId, ProducerId, ShopId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per order line.
pub const MAX_QUANTITY_PER_LINE: i64 = 9999;

/// An in-progress order.
///
/// Lives only in process memory; the remote store becomes the source of
/// truth once submission succeeds and the draft is cleared. The draft owns
/// its lines exclusively — one active session per draft, no locking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderDraft {
    /// Starting-quantity policy for new lines.
    pub policy: QuantityPolicy,
    /// Target shop. Required before submission.
    pub shop_id: Option<ShopId>,
    /// Producer fulfilling the order, when the session knows it.
    pub producer_id: Option<ProducerId>,
    /// Free-text delivery address.
    pub delivery_address: Option<String>,
    /// Free-text notes for the producer.
    pub notes: Option<String>,
    /// Draft currency, adopted from the first added line.
    pub currency: Currency,
    /// Current lines, at most one per catalog item id.
    lines: Vec<OrderLine>,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl OrderDraft {
    /// Create an empty draft with the given quantity policy.
    pub fn new(policy: QuantityPolicy) -> Self {
        let now = current_timestamp();
        Self {
            policy,
            shop_id: None,
            producer_id: None,
            delivery_address: None,
            notes: None,
            currency: Currency::default(),
            lines: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Create an empty draft targeting a shop.
    pub fn for_shop(shop_id: ShopId, policy: QuantityPolicy) -> Self {
        let mut draft = Self::new(policy);
        draft.shop_id = Some(shop_id);
        draft
    }

    /// Add an item to the draft.
    ///
    /// If a line for the same catalog item id already exists its quantity
    /// is incremented; otherwise a new line is inserted with the starting
    /// quantity decided by the draft's [`QuantityPolicy`].
    ///
    /// Returns an error if:
    /// - the item has no persisted identifier
    /// - the quantity is not positive
    /// - the item's currency differs from the draft's
    /// - adding would exceed [`MAX_QUANTITY_PER_LINE`] or overflow
    pub fn add(&mut self, item: &CatalogItem, quantity: i64) -> Result<(), CommerceError> {
        let item_id = item
            .id
            .clone()
            .ok_or_else(|| CommerceError::MissingItemId(item.name.clone()))?;

        if quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }

        let unit_price = item.effective_unit_price();
        if self.lines.is_empty() {
            self.currency = unit_price.currency;
        } else if unit_price.currency != self.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: unit_price.currency.code().to_string(),
            });
        }

        // Merge into the existing line for this item, if any.
        if let Some(existing) = self
            .lines
            .iter_mut()
            .find(|l| l.item.id.as_ref() == Some(&item_id))
        {
            let new_quantity = existing
                .quantity
                .checked_add(quantity)
                .ok_or(CommerceError::Overflow)?;

            if new_quantity > MAX_QUANTITY_PER_LINE {
                return Err(CommerceError::QuantityExceedsLimit(
                    new_quantity,
                    MAX_QUANTITY_PER_LINE,
                ));
            }

            existing.quantity = new_quantity;
            self.updated_at = current_timestamp();
            return Ok(());
        }

        let initial = self.policy.initial_quantity(item, quantity);
        if initial > MAX_QUANTITY_PER_LINE {
            return Err(CommerceError::QuantityExceedsLimit(
                initial,
                MAX_QUANTITY_PER_LINE,
            ));
        }

        self.lines.push(OrderLine {
            item: item.clone(),
            quantity: initial,
        });
        self.updated_at = current_timestamp();
        Ok(())
    }

    /// Overwrite the quantity of the line for `item_id`.
    ///
    /// A quantity of zero or less removes the line; the draft never holds a
    /// line at quantity ≤ 0. Returns whether a line was updated or removed.
    pub fn set_quantity(
        &mut self,
        item_id: &CatalogItemId,
        quantity: i64,
    ) -> Result<bool, CommerceError> {
        if quantity <= 0 {
            return Ok(self.remove(item_id));
        }

        if quantity > MAX_QUANTITY_PER_LINE {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_LINE,
            ));
        }

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.item.id.as_ref() == Some(item_id))
        {
            line.quantity = quantity;
            self.updated_at = current_timestamp();
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Remove the line for `item_id`. No-op when absent.
    pub fn remove(&mut self, item_id: &CatalogItemId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| l.item.id.as_ref() != Some(item_id));
        let removed = self.lines.len() < len_before;
        if removed {
            self.updated_at = current_timestamp();
        }
        removed
    }

    /// Empty the draft. Used after successful submission or explicit cancel.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.updated_at = current_timestamp();
    }

    /// Number of distinct products in the draft.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Sum of per-line quantities.
    pub fn unit_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Check if the draft has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get the line for a catalog item, if present.
    pub fn get_line(&self, item_id: &CatalogItemId) -> Option<&OrderLine> {
        self.lines.iter().find(|l| l.item.id.as_ref() == Some(item_id))
    }

    /// Current lines, in insertion order.
    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    /// Order total: the sum of line subtotals, recomputed on every call so
    /// it can never go stale relative to line mutations.
    pub fn total(&self) -> Result<Money, CommerceError> {
        let mut total = Money::zero(self.currency);
        for line in &self.lines {
            let subtotal = line.subtotal()?;
            total = total
                .try_add(&subtotal)
                .ok_or(CommerceError::Overflow)?;
        }
        Ok(total)
    }

    /// Full pricing breakdown, recomputed fresh.
    pub fn pricing(&self) -> Result<DraftPricing, CommerceError> {
        let mut lines = Vec::with_capacity(self.lines.len());
        for line in &self.lines {
            lines.push(LinePricing {
                item_id: line
                    .item
                    .id
                    .clone()
                    .ok_or_else(|| CommerceError::MissingItemId(line.item.name.clone()))?,
                product_name: line.item.name.clone(),
                unit_price: line.unit_price(),
                quantity: line.quantity,
                subtotal: line.subtotal()?,
            });
        }

        Ok(DraftPricing {
            total: self.total()?,
            line_count: self.line_count(),
            unit_count: self.unit_count(),
            lines,
        })
    }
}

impl Default for OrderDraft {
    fn default() -> Self {
        Self::new(QuantityPolicy::PerUnit)
    }
}

/// One catalog item plus a requested quantity within an order draft.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
    /// The catalog item, snapshotted for the session.
    pub item: CatalogItem,
    /// Requested quantity, always ≥ 1.
    pub quantity: i64,
}

impl OrderLine {
    /// The price used for this line's math: retail when published, else
    /// wholesale.
    pub fn unit_price(&self) -> Money {
        self.item.effective_unit_price()
    }

    /// Line subtotal = effective unit price × quantity.
    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        self.unit_price()
            .try_multiply(self.quantity)
            .ok_or(CommerceError::Overflow)
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
