//! Error type for caller-contract violations.
//!
//! The matching engine distinguishes two failure classes (see the crate
//! docs): caller-contract violations, represented here, and internal
//! invariant violations, which are bugs and `panic!` rather than return
//! an `Err`. `thiserror` was deliberately not pulled in for this single
//! variant — a hand-rolled `Display`/`Error` impl is exactly as much code
//! and keeps the dependency list honest about what is actually used.

use std::fmt;

/// The single error kind the book can return to a caller.
///
/// Covers any input that violates the caller contract documented on
/// [`OrderBook::submit`](crate::book::OrderBook::submit): non-positive
/// quantity, a missing or non-finite price on a priced order type, or an
/// empty instrument id. Rejected orders never mutate book state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum OrderBookError {
    /// The submitted order violates the caller contract; the message
    /// describes which part.
    InvalidOrder(String),
}

impl fmt::Display for OrderBookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderBookError::InvalidOrder(message) => write!(f, "invalid order: {message}"),
        }
    }
}

impl std::error::Error for OrderBookError {}
