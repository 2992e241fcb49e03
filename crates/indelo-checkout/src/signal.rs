//! One-shot "order placed" signal.

use indelo_commerce::OrderId;

/// Latches the id of a successfully placed order until the UI consumes it.
///
/// The signal is observable exactly once per success: `take` returns the
/// order id the first time and `None` afterwards, so a screen rebuild
/// cannot react to the same placement twice.
#[derive(Debug, Default)]
pub struct PlacedSignal {
    pending: Option<OrderId>,
}

impl PlacedSignal {
    /// Create an unlatched signal.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn latch(&mut self, order_id: OrderId) {
        self.pending = Some(order_id);
    }

    /// Consume the pending signal, if any.
    pub fn take(&mut self) -> Option<OrderId> {
        self.pending.take()
    }

    /// Check without consuming.
    pub fn is_latched(&self) -> bool {
        self.pending.is_some()
    }
}
