//! The order book: owns both side ladders, the id index, and the trade tape.

mod matching;
mod operations;
mod snapshot;

pub use snapshot::OrderBookSnapshot;

use std::collections::HashMap;

use crate::ids::OrderId;
use crate::ladder::SideLadder;
use crate::order::Side;
use crate::price::Price;
use crate::time::Timestamp;
use crate::trade::Trade;

/// A single-instrument limit order book with a price-time priority
/// matching engine.
///
/// `OrderBook` is single-threaded and synchronous: every public method
/// runs to completion before the next call is made, and there is no
/// internal concurrency of any kind (see the crate docs). A host that
/// wants to share one `OrderBook` across threads wraps the whole value in
/// a `Mutex` and serializes access through it; the invariants documented
/// on [`submit`](OrderBook::submit) and [`cancel`](OrderBook::cancel) are
/// only guaranteed at call boundaries.
#[derive(Debug, Clone)]
pub struct OrderBook {
    pub(crate) instrument: String,
    pub(crate) bids: SideLadder,
    pub(crate) asks: SideLadder,
    pub(crate) order_locations: HashMap<OrderId, (Side, Price)>,
    pub(crate) trades: Vec<Trade>,
    pub(crate) last_trade: Option<(Price, Timestamp)>,
}

impl OrderBook {
    /// Creates an empty book for `instrument`.
    pub fn new(instrument: impl Into<String>) -> Self {
        let instrument = instrument.into();
        debug_assert!(!instrument.is_empty(), "instrument id should not be empty");
        tracing::debug!(instrument = %instrument, "order book created");
        Self {
            instrument,
            bids: SideLadder::new(Side::Buy),
            asks: SideLadder::new(Side::Sell),
            order_locations: HashMap::new(),
            trades: Vec::new(),
            last_trade: None,
        }
    }

    /// The instrument this book matches orders for.
    pub fn instrument(&self) -> &str {
        &self.instrument
    }

    /// The number of live orders resting in the book.
    pub fn order_count(&self) -> usize {
        self.order_locations.len()
    }

    /// The full trade tape generated so far, in generation order.
    ///
    /// The tape is append-only and unbounded within the book; a caller
    /// running a long simulation should periodically drain whatever it
    /// needs from it. `OrderBook` does not truncate it on its own.
    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    pub(crate) fn ladder(&self, side: Side) -> &SideLadder {
        match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        }
    }

    pub(crate) fn ladder_mut(&mut self, side: Side) -> &mut SideLadder {
        match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_book_is_empty() {
        let book = OrderBook::new("XYZ");
        assert_eq!(book.instrument(), "XYZ");
        assert_eq!(book.order_count(), 0);
        assert!(book.trades().is_empty());
    }
}
