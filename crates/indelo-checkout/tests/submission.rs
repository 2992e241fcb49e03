//! End-to-end submission tests against store doubles.

use async_trait::async_trait;
use indelo_checkout::{SubmissionCoordinator, SubmissionState, SubmitError};
use indelo_commerce::cart::{OrderDraft, QuantityPolicy};
use indelo_commerce::catalog::CatalogItem;
use indelo_commerce::{CatalogItemId, Currency, Money, OrderId, OrderStatus, ShopId, UserId};
use indelo_data::{
    IdentityProvider, MemoryOrderStore, NewOrder, NewOrderItem, OrderStore, PersistedOrder,
    PersistedOrderItem, StaticIdentity, StoreError,
};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Store whose header write always fails.
struct FailingHeaderStore;

#[async_trait]
impl OrderStore for FailingHeaderStore {
    async fn create_order(&self, _order: NewOrder) -> Result<PersistedOrder, StoreError> {
        Err(StoreError::Write("connection reset".to_string()))
    }

    async fn create_order_item(
        &self,
        _item: NewOrderItem,
    ) -> Result<PersistedOrderItem, StoreError> {
        panic!("item write attempted after header failure");
    }

    async fn list_order_items(
        &self,
        _order_id: &OrderId,
    ) -> Result<Vec<PersistedOrderItem>, StoreError> {
        Ok(Vec::new())
    }

    async fn update_order_status(
        &self,
        order_id: &OrderId,
        _status: OrderStatus,
    ) -> Result<PersistedOrder, StoreError> {
        Err(StoreError::NotFound(order_id.to_string()))
    }
}

/// Store that accepts the header and the first `succeed_items` item writes,
/// then fails the rest. Reproduces the partial-failure window.
struct FlakyItemStore {
    inner: MemoryOrderStore,
    succeed_items: usize,
    item_calls: AtomicUsize,
}

impl FlakyItemStore {
    fn new(succeed_items: usize) -> Self {
        Self {
            inner: MemoryOrderStore::new(),
            succeed_items,
            item_calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl OrderStore for FlakyItemStore {
    async fn create_order(&self, order: NewOrder) -> Result<PersistedOrder, StoreError> {
        self.inner.create_order(order).await
    }

    async fn create_order_item(
        &self,
        item: NewOrderItem,
    ) -> Result<PersistedOrderItem, StoreError> {
        let call = self.item_calls.fetch_add(1, Ordering::SeqCst);
        if call >= self.succeed_items {
            return Err(StoreError::Write("insert timed out".to_string()));
        }
        self.inner.create_order_item(item).await
    }

    async fn list_order_items(
        &self,
        order_id: &OrderId,
    ) -> Result<Vec<PersistedOrderItem>, StoreError> {
        self.inner.list_order_items(order_id).await
    }

    async fn update_order_status(
        &self,
        order_id: &OrderId,
        status: OrderStatus,
    ) -> Result<PersistedOrder, StoreError> {
        self.inner.update_order_status(order_id, status).await
    }
}

fn identity() -> StaticIdentity {
    StaticIdentity::signed_in(UserId::new("owner-1"))
}

fn item(id: &str, wholesale: f64) -> CatalogItem {
    CatalogItem::new(
        CatalogItemId::new(id),
        format!("Product {}", id),
        Money::from_decimal(wholesale, Currency::ZAR),
    )
}

fn filled_draft() -> OrderDraft {
    let mut draft = OrderDraft::for_shop(ShopId::new("shop-1"), QuantityPolicy::PerUnit);
    draft.add(&item("a", 10.00), 2).unwrap();
    draft
        .add(
            &item("b", 5.00).with_retail_price(Money::from_decimal(4.00, Currency::ZAR)),
            3,
        )
        .unwrap();
    draft
}

#[tokio::test]
async fn header_failure_leaves_draft_intact() {
    let mut coordinator = SubmissionCoordinator::new(FailingHeaderStore, identity());
    let mut draft = filled_draft();

    let err = coordinator.submit(&mut draft).await.unwrap_err();
    assert!(matches!(err, SubmitError::Remote(StoreError::Write(_))));
    assert_eq!(coordinator.state(), SubmissionState::Failed);

    // All pre-submission lines survive unchanged for retry.
    assert_eq!(draft.line_count(), 2);
    assert_eq!(draft.unit_count(), 5);
    assert_eq!(draft.total().unwrap().amount_cents, 3200);
    assert!(coordinator.take_placed_order().is_none());
}

#[tokio::test]
async fn item_failure_leaves_partial_order_and_draft_intact() {
    let store = FlakyItemStore::new(1);
    let mut coordinator = SubmissionCoordinator::new(store, identity());
    let mut draft = filled_draft();

    let err = coordinator.submit(&mut draft).await.unwrap_err();
    assert!(matches!(err, SubmitError::Remote(StoreError::Write(_))));

    // Header exists with only the first item — the documented
    // partial-failure window.
    let inner = &coordinator.store().inner;
    assert_eq!(inner.order_count(), 1);

    // The local draft is untouched and no signal fired.
    assert_eq!(draft.line_count(), 2);
    assert!(coordinator.take_placed_order().is_none());
}

#[tokio::test]
async fn successful_submission_persists_snapshots() {
    let mut coordinator = SubmissionCoordinator::new(MemoryOrderStore::new(), identity());
    let mut draft = filled_draft();
    draft.delivery_address = Some("12 Kloof St, Cape Town".to_string());
    draft.notes = Some("deliver before noon".to_string());

    let receipt = coordinator.submit(&mut draft).await.unwrap();

    assert_eq!(receipt.order.status, OrderStatus::Pending);
    assert_eq!(receipt.order.shop_id, ShopId::new("shop-1"));
    assert_eq!(
        receipt.order.shipping_address.as_deref(),
        Some("12 Kloof St, Cape Town")
    );
    // 2 x 10.00 wholesale + 3 x 4.00 retail
    assert!((receipt.order.total_amount - 32.0).abs() < 1e-9);

    assert_eq!(receipt.items.len(), 2);
    let b = &receipt.items[1];
    assert_eq!(b.product_name, "Product b");
    assert!((b.unit_price - 4.0).abs() < 1e-9);
    assert!((b.subtotal - 12.0).abs() < 1e-9);

    let listed = coordinator
        .store()
        .list_order_items(&receipt.order.id)
        .await
        .unwrap();
    assert_eq!(listed.len(), 2);

    assert!(draft.is_empty());
    assert_eq!(coordinator.take_placed_order(), Some(receipt.order.id));
    assert_eq!(coordinator.take_placed_order(), None);
}

#[tokio::test]
async fn retry_after_failure_succeeds() {
    let store = FlakyItemStore::new(0);
    let mut coordinator = SubmissionCoordinator::new(store, identity());
    let mut draft = filled_draft();

    assert!(coordinator.submit(&mut draft).await.is_err());
    assert_eq!(draft.line_count(), 2);

    // A retry against a healthy store re-runs validation and both writes.
    let mut coordinator = SubmissionCoordinator::new(MemoryOrderStore::new(), identity());
    let receipt = coordinator.submit(&mut draft).await.unwrap();
    assert_eq!(receipt.items.len(), 2);
    assert!(draft.is_empty());
}

#[tokio::test]
async fn wholesale_draft_submits_with_minimum_quantities() {
    let mut coordinator = SubmissionCoordinator::new(MemoryOrderStore::new(), identity());
    let mut draft = OrderDraft::for_shop(ShopId::new("shop-1"), QuantityPolicy::MinimumOrder);
    draft
        .add(&item("case", 15.00).with_min_order_quantity(6), 1)
        .unwrap();

    let receipt = coordinator.submit(&mut draft).await.unwrap();
    assert_eq!(receipt.items[0].quantity, 6);
    assert!((receipt.order.total_amount - 90.0).abs() < 1e-9);
}

#[tokio::test]
async fn producer_can_walk_order_to_delivered() {
    let mut coordinator = SubmissionCoordinator::new(MemoryOrderStore::new(), identity());
    let mut draft = filled_draft();
    let receipt = coordinator.submit(&mut draft).await.unwrap();

    let store = coordinator.store();
    for status in [
        OrderStatus::Confirmed,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
    ] {
        store
            .update_order_status(&receipt.order.id, status)
            .await
            .unwrap();
    }

    let delivered = store.get_order(&receipt.order.id).unwrap();
    assert_eq!(delivered.status, OrderStatus::Delivered);
    assert!(delivered.fulfilled_at.is_some());

    // Terminal: cancellation is no longer possible.
    let err = store
        .update_order_status(&receipt.order.id, OrderStatus::Cancelled)
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::InvalidTransition { .. }));
}
