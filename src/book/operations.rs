//! Cancellation and book-state queries.

use super::OrderBook;
use crate::ids::OrderId;
use crate::price::{Price, Quantity};
use crate::time::Timestamp;

/// Best-first (price, aggregate quantity) levels for one side of the book.
pub type DepthLevels = Vec<(Price, Quantity)>;

impl OrderBook {
    /// Cancels the live order `order_id`, if it is still resting.
    ///
    /// Returns `true` if an order was removed, `false` if no live order has
    /// that id. Cancelling an id that was already fully filled or already
    /// cancelled is not an error: the operation is idempotent, matching the
    /// edge case documented on this method's callers.
    pub fn cancel(&mut self, order_id: OrderId) -> bool {
        let Some((side, price)) = self.order_locations.remove(&order_id) else {
            return false;
        };
        let Some(level) = self.ladder_mut(side).get_mut(price) else {
            tracing::warn!(
                order_id = %order_id,
                side = %side,
                price = %price,
                "order_locations points at a price with no level",
            );
            panic!("order_locations points at a price with no level");
        };
        let removed = level.remove_by_id(order_id);
        self.ladder_mut(side).drop_if_empty(price);
        tracing::debug!(order_id = %order_id, "order cancelled");
        removed.is_some()
    }

    /// The best bid: the highest price a buyer is resting at, and the
    /// aggregate quantity resting there.
    pub fn best_bid(&self) -> Option<(Price, Quantity)> {
        self.bids.best().map(|level| (level.price(), level.total_quantity()))
    }

    /// The best ask: the lowest price a seller is resting at, and the
    /// aggregate quantity resting there.
    pub fn best_ask(&self) -> Option<(Price, Quantity)> {
        self.asks.best().map(|level| (level.price(), level.total_quantity()))
    }

    /// The best-ask-minus-best-bid spread, or `None` if either side is empty.
    pub fn spread(&self) -> Option<Price> {
        let (bid, _) = self.best_bid()?;
        let (ask, _) = self.best_ask()?;
        Some(ask - bid)
    }

    /// The midpoint between best bid and best ask, or `None` if either side
    /// is empty. Returned as `f64` since a tick-scaled midpoint is not
    /// generally representable as an integer number of ticks.
    pub fn mid_price(&self) -> Option<f64> {
        let (bid, _) = self.best_bid()?;
        let (ask, _) = self.best_ask()?;
        Some((bid.ticks() as f64 + ask.ticks() as f64) / 2.0)
    }

    /// The `n` best bid levels, best-first, as (price, aggregate quantity).
    pub fn bid_depth(&self, n: usize) -> DepthLevels {
        self.bids.depth(n)
    }

    /// The `n` best ask levels, best-first, as (price, aggregate quantity).
    pub fn ask_depth(&self, n: usize) -> DepthLevels {
        self.asks.depth(n)
    }

    /// Both sides' depth to `n` levels, as `(bids, asks)`, each best-first.
    /// A side with fewer than `n` levels returns what exists; neither side
    /// is ever padded.
    pub fn depth(&self, n: usize) -> (DepthLevels, DepthLevels) {
        (self.bid_depth(n), self.ask_depth(n))
    }

    /// The price and timestamp of the most recent trade, if any trade has
    /// ever occurred on this book.
    pub fn last_trade(&self) -> Option<(Price, Timestamp)> {
        self.last_trade
    }
}
