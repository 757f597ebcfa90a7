//! The order record: the unit of identity the matching engine operates on.

use std::fmt;

use crate::ids::OrderId;
use crate::price::{Price, Quantity};
use crate::time::Timestamp;

/// Which side of the market an order is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-snapshot", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// A buy order; rests in the bid ladder.
    Buy,
    /// A sell order; rests in the ask ladder.
    Sell,
}

impl Side {
    /// The other side of the market.
    pub const fn opposite(self) -> Side {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

/// The time-in-force / execution discipline of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-snapshot", derive(serde::Serialize, serde::Deserialize))]
pub enum OrderKind {
    /// Rests in the book at its limit price if not immediately filled.
    Limit,
    /// Has no limit price; consumes liquidity at whatever price the book offers.
    Market,
    /// Executes whatever it can immediately; any unfilled remainder is discarded.
    ImmediateOrCancel,
    /// Must execute in full immediately or not at all.
    FillOrKill,
}

impl fmt::Display for OrderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderKind::Limit => write!(f, "LIMIT"),
            OrderKind::Market => write!(f, "MARKET"),
            OrderKind::ImmediateOrCancel => write!(f, "IOC"),
            OrderKind::FillOrKill => write!(f, "FOK"),
        }
    }
}

/// An agent's intent to trade, and the unit of identity in the book.
///
/// `remaining` starts equal to `original_quantity` and only ever decreases,
/// whether through matching (in the engine) or cancellation (by the
/// caller). An order is "live" while `remaining > 0` and it is referenced
/// by the book's id index; see the order state machine in the crate docs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde-snapshot", derive(serde::Serialize, serde::Deserialize))]
pub struct Order {
    /// Unique identifier assigned at creation.
    pub id: OrderId,
    /// The instrument this order trades.
    pub instrument: String,
    /// Buy or sell.
    pub side: Side,
    /// Limit, market, IOC, or FOK.
    pub kind: OrderKind,
    /// The quantity the order was submitted with. Never changes.
    pub original_quantity: Quantity,
    /// The quantity still unfilled. `0 <= remaining <= original_quantity`.
    pub remaining: Quantity,
    /// The limit price. Ignored (but still stored) for MARKET orders.
    pub price: Price,
    /// The caller-supplied submission time.
    pub timestamp: Timestamp,
    /// Opaque identifier of the agent that owns this order.
    pub agent_id: String,
}

impl Order {
    /// Constructs a new order with `remaining` initialized to `quantity`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        instrument: impl Into<String>,
        side: Side,
        kind: OrderKind,
        quantity: Quantity,
        price: Price,
        timestamp: Timestamp,
        agent_id: impl Into<String>,
    ) -> Self {
        Self {
            id: OrderId::new(),
            instrument: instrument.into(),
            side,
            kind,
            original_quantity: quantity,
            remaining: quantity,
            price,
            timestamp,
            agent_id: agent_id.into(),
        }
    }

    /// `true` once the order has no quantity left to fill.
    pub fn is_fully_filled(&self) -> bool {
        self.remaining.is_zero()
    }

    /// The quantity executed so far (`original - remaining`).
    pub fn filled_quantity(&self) -> Quantity {
        self.original_quantity - self.remaining
    }
}
