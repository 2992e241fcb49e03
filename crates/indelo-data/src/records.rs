//! Wire records for the remote store.
//!
//! Field names match the store's snake_case JSON exactly; monetary values
//! travel as decimal numbers and are converted to [`Money`] at the edge.
//! Timestamps are assigned by the store, never by the client.

use chrono::{DateTime, Utc};
use indelo_commerce::{
    CatalogItemId, Currency, Money, OrderId, OrderItemId, OrderStatus, ProducerId, ShopId,
};
use serde::{Deserialize, Serialize};

/// An order header to be created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewOrder {
    /// Ordering shop.
    pub shop_id: ShopId,
    /// Producer fulfilling the order, when known.
    pub producer_id: Option<ProducerId>,
    /// Initial status. Submission always forces this to pending.
    pub status: OrderStatus,
    /// Order total as a decimal amount.
    pub total_amount: f64,
    /// Order currency.
    pub currency: Currency,
    /// Free-text delivery address.
    pub shipping_address: Option<String>,
    /// Free-text notes.
    pub notes: Option<String>,
}

impl NewOrder {
    /// The total as typed money.
    pub fn total(&self) -> Money {
        Money::from_decimal(self.total_amount, self.currency)
    }
}

/// A durable order header, as returned by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersistedOrder {
    /// Store-assigned identifier.
    pub id: OrderId,
    pub shop_id: ShopId,
    pub producer_id: Option<ProducerId>,
    pub status: OrderStatus,
    pub total_amount: f64,
    pub currency: Currency,
    pub shipping_address: Option<String>,
    pub shipping_status: Option<String>,
    pub tracking_number: Option<String>,
    pub notes: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub fulfilled_at: Option<DateTime<Utc>>,
}

impl PersistedOrder {
    /// The total as typed money.
    pub fn total(&self) -> Money {
        Money::from_decimal(self.total_amount, self.currency)
    }
}

/// An order item to be created.
///
/// Product name, image, and prices are snapshots taken at submission time;
/// they are deliberately decoupled from live catalog data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewOrderItem {
    /// The order this item belongs to.
    pub order_id: OrderId,
    /// Catalog item the snapshot was taken from.
    pub product_id: CatalogItemId,
    /// Quantity ordered.
    pub quantity: i64,
    /// Unit price at order time, as a decimal amount.
    pub unit_price: f64,
    /// Line subtotal at order time, as a decimal amount.
    pub subtotal: f64,
    /// Product name at order time.
    pub product_name: String,
    /// Product image at order time.
    pub product_image_url: Option<String>,
}

/// A durable order item, as returned by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersistedOrderItem {
    /// Store-assigned identifier.
    pub id: OrderItemId,
    pub order_id: OrderId,
    pub product_id: CatalogItemId,
    pub quantity: i64,
    pub unit_price: f64,
    pub subtotal: f64,
    pub product_name: String,
    pub product_image_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}
