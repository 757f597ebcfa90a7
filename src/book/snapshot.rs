//! A point-in-time, read-only view of a book, suitable for serialization.

use super::OrderBook;
use crate::price::{Price, Quantity};
use crate::time::Timestamp;

/// An immutable snapshot of a book's top-of-book and depth, taken at the
/// moment [`OrderBook::snapshot`] was called.
///
/// A snapshot does not track the book afterwards; callers that need a live
/// view call `snapshot()` again.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde-snapshot", derive(serde::Serialize, serde::Deserialize))]
pub struct OrderBookSnapshot {
    /// The instrument the snapshotted book trades.
    pub instrument: String,
    /// Bid levels, best-first.
    pub bids: Vec<(Price, Quantity)>,
    /// Ask levels, best-first.
    pub asks: Vec<(Price, Quantity)>,
    /// Price and timestamp of the most recent trade, if any.
    pub last_trade: Option<(Price, Timestamp)>,
    /// Total number of trades generated over the book's lifetime.
    pub trade_count: usize,
}

impl OrderBook {
    /// Captures the full depth of both ladders, the last trade, and the
    /// trade count into an [`OrderBookSnapshot`].
    pub fn snapshot(&self) -> OrderBookSnapshot {
        OrderBookSnapshot {
            instrument: self.instrument.clone(),
            bids: self.bids.depth(usize::MAX),
            asks: self.asks.depth(usize::MAX),
            last_trade: self.last_trade,
            trade_count: self.trades.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::{Order, OrderKind, Side};

    fn limit(side: Side, price: u64, qty: u64) -> Order {
        Order::new(
            "XYZ",
            side,
            OrderKind::Limit,
            Quantity::new(qty),
            Price::new(price),
            Timestamp::new(1),
            "agent",
        )
    }

    #[test]
    fn snapshot_captures_both_ladders_and_trade_count() {
        let mut book = OrderBook::new("XYZ");
        book.submit(limit(Side::Buy, 990, 5), Timestamp::new(1)).unwrap();
        book.submit(limit(Side::Sell, 1000, 3), Timestamp::new(2)).unwrap();
        book.submit(limit(Side::Buy, 1000, 3), Timestamp::new(3)).unwrap();

        let snapshot = book.snapshot();
        assert_eq!(snapshot.instrument, "XYZ");
        assert_eq!(snapshot.bids, vec![(Price::new(990), Quantity::new(5))]);
        assert!(snapshot.asks.is_empty());
        assert_eq!(snapshot.trade_count, 1);
        assert_eq!(snapshot.last_trade, Some((Price::new(1000), Timestamp::new(3))));
    }

    #[cfg(feature = "serde-snapshot")]
    #[test]
    fn snapshot_round_trips_through_json() {
        let mut book = OrderBook::new("XYZ");
        book.submit(limit(Side::Buy, 990, 5), Timestamp::new(1)).unwrap();

        let snapshot = book.snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let decoded: OrderBookSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, snapshot);
    }
}
