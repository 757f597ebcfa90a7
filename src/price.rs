//! Fixed-point price and quantity types.
//!
//! Prices are stored as scaled integers ("ticks") rather than `f64`: the
//! matching engine uses price equality as a map key, and binary floating
//! point cannot guarantee that two prices which should compare equal at a
//! level boundary actually do. The scale of one tick (one cent, one
//! thousandth of a unit, whatever the caller's market convention is) is
//! entirely the caller's choice; this crate never interprets the value.

use std::fmt;
use std::ops::{Add, Sub};

/// A nonnegative price, represented as an integer count of ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde-snapshot", derive(serde::Serialize, serde::Deserialize))]
pub struct Price(u64);

impl Price {
    /// Builds a price from a raw tick count.
    pub const fn new(ticks: u64) -> Self {
        Self(ticks)
    }

    /// Returns the raw tick count.
    pub const fn ticks(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Price {
    type Output = Price;
    fn add(self, rhs: Price) -> Price {
        Price(self.0 + rhs.0)
    }
}

impl Sub for Price {
    type Output = Price;
    fn sub(self, rhs: Price) -> Price {
        Price(self.0 - rhs.0)
    }
}

/// A positive traded quantity, represented as an integer count of lots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde-snapshot", derive(serde::Serialize, serde::Deserialize))]
pub struct Quantity(u64);

impl Quantity {
    /// Builds a quantity from a raw lot count.
    pub const fn new(lots: u64) -> Self {
        Self(lots)
    }

    /// Returns the raw lot count.
    pub const fn lots(self) -> u64 {
        self.0
    }

    /// `true` when the quantity is exactly zero.
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Quantity {
    type Output = Quantity;
    fn add(self, rhs: Quantity) -> Quantity {
        Quantity(self.0 + rhs.0)
    }
}

impl Sub for Quantity {
    type Output = Quantity;
    fn sub(self, rhs: Quantity) -> Quantity {
        Quantity(self.0 - rhs.0)
    }
}
