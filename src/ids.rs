//! Opaque 128-bit identifiers for orders and trades.

use std::fmt;
use uuid::Uuid;

/// Unique identifier assigned to an [`Order`](crate::order::Order) at creation.
///
/// Opaque and globally unique; callers should treat it as an unstructured
/// 128-bit value and never parse or derive meaning from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-snapshot", derive(serde::Serialize, serde::Deserialize))]
pub struct OrderId(Uuid);

impl OrderId {
    /// Generates a new random order id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Unique identifier assigned to a [`Trade`](crate::trade::Trade) at execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-snapshot", derive(serde::Serialize, serde::Deserialize))]
pub struct TradeId(Uuid);

impl TradeId {
    /// Generates a new random trade id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TradeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TradeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_ids_are_unique() {
        assert_ne!(OrderId::new(), OrderId::new());
    }

    #[test]
    fn trade_ids_are_unique() {
        assert_ne!(TradeId::new(), TradeId::new());
    }

    #[test]
    fn order_id_display_is_not_empty() {
        assert!(!OrderId::new().to_string().is_empty());
    }
}
