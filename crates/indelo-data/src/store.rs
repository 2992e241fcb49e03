//! Remote order-store contract.

use crate::error::StoreError;
use crate::records::{NewOrder, NewOrderItem, PersistedOrder, PersistedOrderItem};
use async_trait::async_trait;
use indelo_commerce::{OrderId, OrderStatus};

/// Table-oriented CRUD over the remote store's order tables.
///
/// Each call is a single round trip; the store offers no cross-call
/// atomicity. Writes either return the created/updated record or a
/// [`StoreError`] carrying the collaborator's message.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Create an order header, returning it with a store-assigned id.
    async fn create_order(&self, order: NewOrder) -> Result<PersistedOrder, StoreError>;

    /// Create one order item referencing an existing header.
    async fn create_order_item(
        &self,
        item: NewOrderItem,
    ) -> Result<PersistedOrderItem, StoreError>;

    /// List the items belonging to an order.
    async fn list_order_items(
        &self,
        order_id: &OrderId,
    ) -> Result<Vec<PersistedOrderItem>, StoreError>;

    /// Update an order's status, enforcing the lifecycle transition rules.
    async fn update_order_status(
        &self,
        order_id: &OrderId,
        status: OrderStatus,
    ) -> Result<PersistedOrder, StoreError>;
}
