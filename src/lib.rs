//! # Limit Book Core
//!
//! A price-time priority limit order book and matching engine for a single
//! financial instrument.
//!
//! ## Design Goals
//!
//! - **Correctness**: every public operation leaves the book in a state that
//!   satisfies the book's invariants (no crossed book, no empty price
//!   levels, FIFO ordering within a level, no empty trades).
//! - **Determinism**: given the same sequence of calls, the book produces
//!   the same sequence of trades. There is no hidden clock: every timestamp
//!   on an order or trade is supplied by the caller.
//! - **Single-threaded by design**: `OrderBook` is not `Sync`-friendly for
//!   concurrent mutation on purpose. A host that needs to share one book
//!   across threads wraps it in a `Mutex` and serializes access through it,
//!   rather than this crate building its own internal locking. See
//!   [`OrderBook`] for the exact call-boundary guarantees this buys.
//!
//! ## Order types
//!
//! - **Limit**: rests at its limit price if not immediately (fully)
//!   matched.
//! - **Market**: has no limit price; walks the opposite ladder until filled
//!   or the ladder is exhausted. Never rests.
//! - **Immediate-or-cancel (IOC)**: matches whatever it can against the
//!   current book and discards any unfilled remainder. Never rests.
//! - **Fill-or-kill (FOK)**: matches in full immediately or not at all. If
//!   the opposite side cannot supply the full requested quantity within the
//!   order's limit, the book is left untouched and no trades occur.
//!
//! ## Price-time priority
//!
//! Orders at the same price are matched in arrival order (FIFO). Across
//! price levels, the best price always matches first. The execution price
//! of a trade is always the resting (passive) order's price, never the
//! aggressor's — the price-improvement rule.

pub mod book;
pub mod error;
pub mod ids;
pub mod ladder;
pub mod order;
pub mod price;
pub mod price_level;
pub mod time;
pub mod trade;

pub mod prelude {
    //! Re-exports the types most callers need.
    //!
    //! ```
    //! use limit_book_core::prelude::*;
    //! ```
    pub use crate::book::{OrderBook, OrderBookSnapshot};
    pub use crate::error::OrderBookError;
    pub use crate::ids::{OrderId, TradeId};
    pub use crate::order::{Order, OrderKind, Side};
    pub use crate::price::{Price, Quantity};
    pub use crate::time::Timestamp;
    pub use crate::trade::Trade;
}
