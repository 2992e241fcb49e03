//! Catalog item types.

use crate::ids::CatalogItemId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A sellable product as known to the client.
///
/// Catalog items are created by the catalog collaborator and treated as
/// immutable for the duration of an ordering session. An item fresh off a
/// producer's listing form may not have a persisted identifier yet; such
/// drafts cannot enter an order draft (see [`OrderDraft::add`]).
///
/// [`OrderDraft::add`]: crate::cart::OrderDraft::add
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogItem {
    /// Persisted identifier. `None` for a not-yet-saved draft listing.
    pub id: Option<CatalogItemId>,
    /// Display name.
    pub name: String,
    /// Producer brand, if any.
    pub brand: Option<String>,
    /// Wholesale unit price. Always present.
    pub wholesale_price: Money,
    /// Retail unit price. When published, this is the price the end
    /// consumer pays; wholesale is the B2B fallback.
    pub retail_price: Option<Money>,
    /// Primary product image URL.
    pub image_url: Option<String>,
    /// Units per case for packaged goods.
    pub units_per_case: i64,
    /// Minimum quantity a shop may order wholesale.
    pub min_order_quantity: i64,
}

impl CatalogItem {
    /// Create a new catalog item with default packaging metadata.
    pub fn new(
        id: CatalogItemId,
        name: impl Into<String>,
        wholesale_price: Money,
    ) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            brand: None,
            wholesale_price,
            retail_price: None,
            image_url: None,
            units_per_case: 1,
            min_order_quantity: 1,
        }
    }

    /// Create a draft item that has not been persisted yet.
    pub fn draft(name: impl Into<String>, wholesale_price: Money) -> Self {
        Self {
            id: None,
            name: name.into(),
            brand: None,
            wholesale_price,
            retail_price: None,
            image_url: None,
            units_per_case: 1,
            min_order_quantity: 1,
        }
    }

    /// Set the retail price.
    pub fn with_retail_price(mut self, price: Money) -> Self {
        self.retail_price = Some(price);
        self
    }

    /// Set the producer brand.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Set the product image URL.
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Set the minimum wholesale order quantity.
    pub fn with_min_order_quantity(mut self, quantity: i64) -> Self {
        self.min_order_quantity = quantity.max(1);
        self
    }

    /// Set the units-per-case packaging multiplier.
    pub fn with_units_per_case(mut self, units: i64) -> Self {
        self.units_per_case = units.max(1);
        self
    }

    /// The price used for all subtotal/total math: retail when published,
    /// wholesale otherwise.
    pub fn effective_unit_price(&self) -> Money {
        self.retail_price.unwrap_or(self.wholesale_price)
    }

    /// Whether this item has been persisted and can enter an order.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_effective_price_prefers_retail() {
        let item = CatalogItem::new(
            CatalogItemId::new("p1"),
            "Honeybush Tea",
            Money::from_decimal(10.00, Currency::ZAR),
        )
        .with_retail_price(Money::from_decimal(8.00, Currency::ZAR));

        assert_eq!(item.effective_unit_price().amount_cents, 800);
    }

    #[test]
    fn test_effective_price_falls_back_to_wholesale() {
        let item = CatalogItem::new(
            CatalogItemId::new("p1"),
            "Honeybush Tea",
            Money::from_decimal(10.00, Currency::ZAR),
        );

        assert_eq!(item.effective_unit_price().amount_cents, 1000);
    }

    #[test]
    fn test_draft_is_not_persisted() {
        let item = CatalogItem::draft("Unsaved", Money::from_decimal(5.00, Currency::ZAR));
        assert!(!item.is_persisted());
    }

    #[test]
    fn test_packaging_floors() {
        let item = CatalogItem::new(
            CatalogItemId::new("p1"),
            "Biltong",
            Money::from_decimal(20.00, Currency::ZAR),
        )
        .with_min_order_quantity(0)
        .with_units_per_case(-3);

        assert_eq!(item.min_order_quantity, 1);
        assert_eq!(item.units_per_case, 1);
    }
}
