//! An ordered mapping from price to [`PriceLevel`], one per side.

use std::collections::BTreeMap;

use crate::order::Side;
use crate::price::Price;
use crate::price_level::PriceLevel;

/// One side of the book: every resting price level for either bids or asks.
///
/// Backed by a `BTreeMap` rather than a concurrent skip list — the book is
/// single-threaded (see the crate docs), so there is exactly one writer and
/// no value in lock-free structures here. Both sides share the same
/// underlying map type; `side` only controls which direction counts as
/// "best" and "first" when iterating.
#[derive(Debug, Clone)]
pub struct SideLadder {
    side: Side,
    levels: BTreeMap<Price, PriceLevel>,
}

impl SideLadder {
    /// Creates an empty ladder for the given side.
    pub fn new(side: Side) -> Self {
        Self {
            side,
            levels: BTreeMap::new(),
        }
    }

    /// `true` when the ladder holds no price levels.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// The best (highest bid / lowest ask) price level, if any.
    pub fn best(&self) -> Option<&PriceLevel> {
        match self.side {
            Side::Buy => self.levels.values().next_back(),
            Side::Sell => self.levels.values().next(),
        }
    }

    /// A mutable reference to the best price level, if any.
    pub fn best_mut(&mut self) -> Option<&mut PriceLevel> {
        match self.side {
            Side::Buy => self.levels.values_mut().next_back(),
            Side::Sell => self.levels.values_mut().next(),
        }
    }

    /// The best price itself, if any.
    pub fn best_price(&self) -> Option<Price> {
        self.best().map(PriceLevel::price)
    }

    /// Returns the level at `price`, creating an empty one if absent.
    pub fn get_or_create(&mut self, price: Price) -> &mut PriceLevel {
        self.levels.entry(price).or_insert_with(|| PriceLevel::new(price))
    }

    /// Looks up the level at `price` without creating it.
    pub fn get_mut(&mut self, price: Price) -> Option<&mut PriceLevel> {
        self.levels.get_mut(&price)
    }

    /// Removes the level at `price`, if present.
    pub fn remove(&mut self, price: Price) -> Option<PriceLevel> {
        self.levels.remove(&price)
    }

    /// Drops the level at `price` if it has become empty. Callers invoke
    /// this right after a dequeue/remove to uphold the "no empty level
    /// persists" invariant.
    pub fn drop_if_empty(&mut self, price: Price) {
        if self.levels.get(&price).is_some_and(PriceLevel::is_empty) {
            self.levels.remove(&price);
        }
    }

    /// Iterates levels in best-first order (descending for bids, ascending
    /// for asks).
    pub fn levels_best_first(&self) -> Box<dyn Iterator<Item = &PriceLevel> + '_> {
        match self.side {
            Side::Buy => Box::new(self.levels.values().rev()),
            Side::Sell => Box::new(self.levels.values()),
        }
    }

    /// The `n` best levels, best-first, as (price, aggregate quantity) pairs.
    pub fn depth(&self, n: usize) -> Vec<(Price, crate::price::Quantity)> {
        self.levels_best_first()
            .take(n)
            .map(|level| (level.price(), level.total_quantity()))
            .collect()
    }
}
