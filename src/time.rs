//! The advisory timestamp type stamped onto orders and trades.
//!
//! The core never reads the wall clock itself (see the crate root docs):
//! every timestamp arrives from the caller. `Timestamp` is an opaque,
//! monotonically-nondecreasing-by-convention integer; the unit (seconds,
//! millis, an external simulation tick counter) is up to the caller.

use std::fmt;

/// A caller-supplied point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde-snapshot", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(u64);

impl Timestamp {
    /// Wraps a raw caller-supplied timestamp value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw timestamp value.
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
