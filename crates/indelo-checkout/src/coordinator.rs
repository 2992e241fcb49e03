//! The order submission coordinator.

use crate::error::SubmitError;
use crate::signal::PlacedSignal;
use crate::state::SubmissionState;
use indelo_commerce::cart::OrderDraft;
use indelo_commerce::{OrderId, OrderStatus};
use indelo_data::{
    IdentityProvider, NewOrder, NewOrderItem, OrderStore, PersistedOrder, PersistedOrderItem,
};
use tracing::{debug, info, warn};

/// What a successful submission persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionReceipt {
    /// The durable order header.
    pub order: PersistedOrder,
    /// The durable item snapshots, in line order.
    pub items: Vec<PersistedOrderItem>,
}

/// Converts an in-progress draft into a persisted order.
///
/// The store and identity collaborators are injected, so tests run against
/// in-memory doubles with fixed identities. `submit` takes the coordinator
/// by exclusive borrow for the whole attempt: once the remote writes begin
/// there is no way to start a second submission or cancel the first.
pub struct SubmissionCoordinator<S, I> {
    store: S,
    identity: I,
    state: SubmissionState,
    placed: PlacedSignal,
}

impl<S: OrderStore, I: IdentityProvider> SubmissionCoordinator<S, I> {
    /// Create a coordinator over the given collaborators.
    pub fn new(store: S, identity: I) -> Self {
        Self {
            store,
            identity,
            state: SubmissionState::Idle,
            placed: PlacedSignal::new(),
        }
    }

    /// Current state of the submission machine.
    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Consume the one-shot "order placed" signal, if a submission
    /// succeeded since the last call.
    pub fn take_placed_order(&mut self) -> Option<OrderId> {
        self.placed.take()
    }

    /// Access the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Submit the draft: validate locally, then write the order header
    /// followed by one item snapshot per line, sequentially.
    ///
    /// On success the draft is cleared and the placed signal latched. On
    /// any failure the draft is left intact for retry. If an item write
    /// fails after the header write succeeded, the persisted order is left
    /// partially populated; no rollback is attempted and the error only
    /// carries the store's message.
    pub async fn submit(
        &mut self,
        draft: &mut OrderDraft,
    ) -> Result<SubmissionReceipt, SubmitError> {
        self.state = SubmissionState::Validating;

        let prepared = match self.validate(draft) {
            Ok(p) => p,
            Err(e) => {
                self.state = SubmissionState::Failed;
                return Err(e);
            }
        };

        self.state = SubmissionState::Submitting;
        match self.write(draft, prepared).await {
            Ok(receipt) => {
                draft.clear();
                self.placed.latch(receipt.order.id.clone());
                self.state = SubmissionState::Succeeded;
                info!(order_id = %receipt.order.id, items = receipt.items.len(), "order placed");
                Ok(receipt)
            }
            Err(e) => {
                self.state = SubmissionState::Failed;
                Err(e)
            }
        }
    }

    /// Local preconditions. No remote call is made from here.
    fn validate(&self, draft: &OrderDraft) -> Result<NewOrder, SubmitError> {
        let shop_id = draft.shop_id.clone().ok_or(SubmitError::MissingShop)?;

        if draft.is_empty() {
            return Err(SubmitError::EmptyOrder);
        }

        let user_id = self
            .identity
            .current_user_id()
            .ok_or(SubmitError::NotAuthenticated)?;
        debug!(user_id = %user_id, shop_id = %shop_id, "submission validated");

        let total = draft.total()?;

        Ok(NewOrder {
            shop_id,
            producer_id: draft.producer_id.clone(),
            // Status is always forced to pending on creation.
            status: OrderStatus::Pending,
            total_amount: total.to_decimal(),
            currency: draft.currency,
            shipping_address: draft.delivery_address.clone(),
            notes: draft.notes.clone(),
        })
    }

    /// The two dependent remote writes: header first, then items one at a
    /// time, preserving line order.
    async fn write(
        &self,
        draft: &OrderDraft,
        new_order: NewOrder,
    ) -> Result<SubmissionReceipt, SubmitError> {
        let order = self.store.create_order(new_order).await?;
        debug!(order_id = %order.id, "order header created");

        let mut items = Vec::with_capacity(draft.line_count());
        for line in draft.lines() {
            let product_id = line.item.id.clone().ok_or_else(|| {
                indelo_commerce::CommerceError::MissingItemId(line.item.name.clone())
            })?;

            // Snapshot taken from the line at submission time; never
            // re-derived from the live catalog.
            let snapshot = NewOrderItem {
                order_id: order.id.clone(),
                product_id,
                quantity: line.quantity,
                unit_price: line.unit_price().to_decimal(),
                subtotal: line.subtotal()?.to_decimal(),
                product_name: line.item.name.clone(),
                product_image_url: line.item.image_url.clone(),
            };

            match self.store.create_order_item(snapshot).await {
                Ok(item) => items.push(item),
                Err(e) => {
                    warn!(
                        order_id = %order.id,
                        written = items.len(),
                        expected = draft.line_count(),
                        "item write failed after header; order left partially populated"
                    );
                    return Err(e.into());
                }
            }
        }

        Ok(SubmissionReceipt { order, items })
    }
}
