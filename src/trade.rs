//! The trade record: an immutable fact about a single execution.

use crate::ids::{OrderId, TradeId};
use crate::price::{Price, Quantity};
use crate::time::Timestamp;

/// A single execution between two orders.
///
/// By convention `buy_order_id` always names the buy-side order and
/// `sell_order_id` always names the sell-side order, regardless of which
/// side was the aggressor. The execution `price` is always the resting
/// (passive) order's price — see the price-improvement law in the crate
/// docs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde-snapshot", derive(serde::Serialize, serde::Deserialize))]
pub struct Trade {
    /// Unique identifier for this trade.
    pub id: TradeId,
    /// The instrument this trade occurred on.
    pub instrument: String,
    /// The buy-side order's id.
    pub buy_order_id: OrderId,
    /// The sell-side order's id.
    pub sell_order_id: OrderId,
    /// The execution price (always the resting order's price).
    pub price: Price,
    /// The quantity executed.
    pub quantity: Quantity,
    /// When the trade occurred.
    pub timestamp: Timestamp,
    /// Agent id that owned the buy-side order.
    pub buyer_agent_id: String,
    /// Agent id that owned the sell-side order.
    pub seller_agent_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trade_ids_differ_across_instances() {
        let t1 = Trade {
            id: TradeId::new(),
            instrument: "XYZ".into(),
            buy_order_id: OrderId::new(),
            sell_order_id: OrderId::new(),
            price: Price::new(100),
            quantity: Quantity::new(10),
            timestamp: Timestamp::new(1),
            buyer_agent_id: "buyer".into(),
            seller_agent_id: "seller".into(),
        };
        let t2 = Trade { id: TradeId::new(), ..t1.clone() };
        assert_ne!(t1.id, t2.id);
        assert_eq!(t1.price, t2.price);
    }
}
