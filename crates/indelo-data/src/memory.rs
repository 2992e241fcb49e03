//! In-memory order store.
//!
//! Backs tests and local development. Mirrors the hosted store's observable
//! behavior: assigns identifiers and timestamps, enforces the header
//! foreign key for items, and applies the status lifecycle rules.

use crate::error::StoreError;
use crate::records::{NewOrder, NewOrderItem, PersistedOrder, PersistedOrderItem};
use crate::store::OrderStore;
use async_trait::async_trait;
use chrono::Utc;
use indelo_commerce::{OrderId, OrderItemId, OrderStatus};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

#[derive(Default)]
struct Tables {
    orders: HashMap<OrderId, PersistedOrder>,
    items: HashMap<OrderId, Vec<PersistedOrderItem>>,
}

/// In-memory [`OrderStore`] implementation.
#[derive(Default)]
pub struct MemoryOrderStore {
    tables: Mutex<Tables>,
    next_id: AtomicU64,
}

impl MemoryOrderStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn assign_id(&self, prefix: &str) -> String {
        let n = self.next_id.fetch_add(1, Ordering::SeqCst);
        format!("{}-{}", prefix, n + 1)
    }

    /// Number of order headers currently stored.
    pub fn order_count(&self) -> usize {
        self.tables.lock().map(|t| t.orders.len()).unwrap_or(0)
    }

    /// Fetch a stored order header by id.
    pub fn get_order(&self, order_id: &OrderId) -> Option<PersistedOrder> {
        self.tables
            .lock()
            .ok()
            .and_then(|t| t.orders.get(order_id).cloned())
    }
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
    async fn create_order(&self, order: NewOrder) -> Result<PersistedOrder, StoreError> {
        let mut tables = self
            .tables
            .lock()
            .map_err(|e| StoreError::Write(e.to_string()))?;

        let now = Utc::now();
        let persisted = PersistedOrder {
            id: OrderId::new(self.assign_id("ord")),
            shop_id: order.shop_id,
            producer_id: order.producer_id,
            status: order.status,
            total_amount: order.total_amount,
            currency: order.currency,
            shipping_address: order.shipping_address,
            shipping_status: None,
            tracking_number: None,
            notes: order.notes,
            created_at: Some(now),
            updated_at: Some(now),
            fulfilled_at: None,
        };

        tables
            .orders
            .insert(persisted.id.clone(), persisted.clone());
        Ok(persisted)
    }

    async fn create_order_item(
        &self,
        item: NewOrderItem,
    ) -> Result<PersistedOrderItem, StoreError> {
        let mut tables = self
            .tables
            .lock()
            .map_err(|e| StoreError::Write(e.to_string()))?;

        if !tables.orders.contains_key(&item.order_id) {
            return Err(StoreError::NotFound(item.order_id.to_string()));
        }

        let persisted = PersistedOrderItem {
            id: OrderItemId::new(self.assign_id("item")),
            order_id: item.order_id.clone(),
            product_id: item.product_id,
            quantity: item.quantity,
            unit_price: item.unit_price,
            subtotal: item.subtotal,
            product_name: item.product_name,
            product_image_url: item.product_image_url,
            created_at: Some(Utc::now()),
        };

        tables
            .items
            .entry(item.order_id)
            .or_default()
            .push(persisted.clone());
        Ok(persisted)
    }

    async fn list_order_items(
        &self,
        order_id: &OrderId,
    ) -> Result<Vec<PersistedOrderItem>, StoreError> {
        let tables = self
            .tables
            .lock()
            .map_err(|e| StoreError::Write(e.to_string()))?;

        if !tables.orders.contains_key(order_id) {
            return Err(StoreError::NotFound(order_id.to_string()));
        }

        Ok(tables.items.get(order_id).cloned().unwrap_or_default())
    }

    async fn update_order_status(
        &self,
        order_id: &OrderId,
        status: OrderStatus,
    ) -> Result<PersistedOrder, StoreError> {
        let mut tables = self
            .tables
            .lock()
            .map_err(|e| StoreError::Write(e.to_string()))?;

        let order = tables
            .orders
            .get_mut(order_id)
            .ok_or_else(|| StoreError::NotFound(order_id.to_string()))?;

        if !order.status.can_transition_to(status) {
            return Err(StoreError::InvalidTransition {
                from: order.status.as_str().to_string(),
                to: status.as_str().to_string(),
            });
        }

        let now = Utc::now();
        order.status = status;
        order.updated_at = Some(now);
        if status == OrderStatus::Delivered {
            order.fulfilled_at = Some(now);
        }

        Ok(order.clone())
    }
}
