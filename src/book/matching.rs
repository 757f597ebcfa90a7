//! The matching core: `submit` and the price-time priority match loop.

use super::OrderBook;
use crate::error::OrderBookError;
use crate::ids::TradeId;
use crate::order::{Order, OrderKind, Side};
use crate::price::{Price, Quantity};
use crate::time::Timestamp;
use crate::trade::Trade;

impl OrderBook {
    /// Submits `order` for matching against the resting book, stamping
    /// every generated trade with `now`.
    ///
    /// # Errors
    /// Returns [`OrderBookError::InvalidOrder`] if `order.original_quantity`
    /// is zero, `order.instrument` is empty, or it does not match this
    /// book's instrument. Rejected orders never mutate book state. Every
    /// other input is well-formed by construction: `Side` and `OrderKind`
    /// are Rust enums (no "unknown side/type" is representable), and
    /// `Price`/`Quantity` are unsigned fixed-point integers (no negative or
    /// NaN price is representable either).
    ///
    /// A `FillOrKill` order that cannot be filled in full is not an error:
    /// it returns `Ok(vec![])` with the book left unchanged, per the FOK
    /// atomicity law.
    pub fn submit(&mut self, order: Order, now: Timestamp) -> Result<Vec<Trade>, OrderBookError> {
        self.validate(&order)?;
        let mut order = order;
        order.remaining = order.original_quantity;

        tracing::trace!(
            order_id = %order.id,
            side = %order.side,
            kind = %order.kind,
            price = %order.price,
            qty = %order.original_quantity,
            "submit",
        );

        if order.kind == OrderKind::FillOrKill {
            let opposite_side = order.side.opposite();
            let available = self.cumulative_available_quantity(opposite_side, &order);
            if available < order.remaining {
                tracing::trace!(
                    order_id = %order.id,
                    available = %available,
                    requested = %order.remaining,
                    "fill-or-kill rejected: insufficient liquidity",
                );
                return Ok(Vec::new());
            }
        }

        let trades = self.run_matching(&mut order, now);

        if !order.remaining.is_zero() {
            match order.kind {
                OrderKind::Limit => {
                    tracing::trace!(order_id = %order.id, remaining = %order.remaining, "booking residual");
                    self.insert_resting(order);
                }
                OrderKind::Market | OrderKind::ImmediateOrCancel | OrderKind::FillOrKill => {
                    tracing::trace!(order_id = %order.id, remaining = %order.remaining, "discarding residual");
                }
            }
        }

        Ok(trades)
    }

    fn validate(&self, order: &Order) -> Result<(), OrderBookError> {
        if order.original_quantity.is_zero() {
            return Err(OrderBookError::InvalidOrder(
                "quantity must be positive".to_string(),
            ));
        }
        if order.instrument.is_empty() {
            return Err(OrderBookError::InvalidOrder(
                "instrument must not be empty".to_string(),
            ));
        }
        if order.instrument != self.instrument {
            return Err(OrderBookError::InvalidOrder(format!(
                "order instrument '{}' does not match book instrument '{}'",
                order.instrument, self.instrument
            )));
        }
        Ok(())
    }

    /// Sums `total_quantity` over opposite-side levels walked best-first
    /// while `order`'s limit is still satisfied, stopping at the first
    /// level that fails it (ladder order is monotonic in price, so once the
    /// limit fails it fails for every level after).
    fn cumulative_available_quantity(&self, opposite_side: Side, order: &Order) -> Quantity {
        let mut sum = Quantity::new(0);
        for level in self.ladder(opposite_side).levels_best_first() {
            let satisfies = match order.side {
                Side::Buy => order.price >= level.price(),
                Side::Sell => order.price <= level.price(),
            };
            if !satisfies {
                break;
            }
            sum = sum + level.total_quantity();
        }
        sum
    }

    /// Consumes opposite-side liquidity until `order` is fully filled, the
    /// opposite ladder is empty, or the next best opposite price no longer
    /// satisfies `order`'s limit (market orders have no limit and only stop
    /// on the first two conditions).
    fn run_matching(&mut self, order: &mut Order, now: Timestamp) -> Vec<Trade> {
        let mut trades = Vec::new();
        loop {
            if order.remaining.is_zero() {
                break;
            }
            let opposite_side = order.side.opposite();
            let Some(best_price) = self.ladder(opposite_side).best_price() else {
                break;
            };
            if order.kind != OrderKind::Market {
                let crosses = match order.side {
                    Side::Buy => order.price >= best_price,
                    Side::Sell => order.price <= best_price,
                };
                if !crosses {
                    break;
                }
            }
            trades.push(self.execute_match_step(order, best_price, now));
        }
        trades
    }

    /// Matches `order` against the front of the opposite level at `price`,
    /// executing at most one trade: the resting order's price always sets
    /// the execution price (the price-improvement law).
    fn execute_match_step(&mut self, order: &mut Order, price: Price, now: Timestamp) -> Trade {
        let opposite_side = order.side.opposite();
        let Some(level) = self.ladder_mut(opposite_side).get_mut(price) else {
            tracing::warn!(side = %opposite_side, price = %price, "best price has no resting level");
            panic!("best price must have a resting level");
        };
        let Some(resting) = level.peek() else {
            tracing::warn!(side = %opposite_side, price = %price, "best level is empty");
            panic!("best level must be non-empty");
        };
        let resting_id = resting.id;
        let resting_agent_id = resting.agent_id.clone();
        let trade_qty = order.remaining.min(resting.remaining);

        level.reduce_front(trade_qty);
        order.remaining = order.remaining - trade_qty;

        let Some(front) = level.peek() else {
            tracing::warn!(side = %opposite_side, price = %price, "front order missing after a partial fill");
            panic!("front order still present after a partial fill");
        };
        let fully_filled = front.remaining.is_zero();
        if fully_filled {
            let Some(removed) = level.dequeue_front() else {
                tracing::warn!(side = %opposite_side, price = %price, "front order missing on full fill");
                panic!("front order must exist");
            };
            self.order_locations.remove(&removed.id);
        }
        self.ladder_mut(opposite_side).drop_if_empty(price);

        let (buy_order_id, sell_order_id, buyer_agent_id, seller_agent_id) = match order.side {
            Side::Buy => (
                order.id,
                resting_id,
                order.agent_id.clone(),
                resting_agent_id,
            ),
            Side::Sell => (
                resting_id,
                order.id,
                resting_agent_id,
                order.agent_id.clone(),
            ),
        };

        self.last_trade = Some((price, now));

        let trade = Trade {
            id: TradeId::new(),
            instrument: self.instrument.clone(),
            buy_order_id,
            sell_order_id,
            price,
            quantity: trade_qty,
            timestamp: now,
            buyer_agent_id,
            seller_agent_id,
        };
        tracing::trace!(
            trade_id = %trade.id,
            price = %trade.price,
            qty = %trade.quantity,
            buy_order_id = %trade.buy_order_id,
            sell_order_id = %trade.sell_order_id,
            "trade",
        );
        self.trades.push(trade.clone());
        trade
    }

    fn insert_resting(&mut self, order: Order) {
        let (side, price, id) = (order.side, order.price, order.id);
        self.ladder_mut(side).get_or_create(price).enqueue(order);
        self.order_locations.insert(id, (side, price));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::price::Quantity;

    fn limit(side: Side, price: u64, qty: u64, ts: u64, agent: &str) -> Order {
        Order::new(
            "XYZ",
            side,
            OrderKind::Limit,
            Quantity::new(qty),
            Price::new(price),
            Timestamp::new(ts),
            agent,
        )
    }

    fn market(side: Side, qty: u64, ts: u64, agent: &str) -> Order {
        Order::new(
            "XYZ",
            side,
            OrderKind::Market,
            Quantity::new(qty),
            Price::new(0),
            Timestamp::new(ts),
            agent,
        )
    }

    fn ioc(side: Side, price: u64, qty: u64, ts: u64, agent: &str) -> Order {
        Order::new(
            "XYZ",
            side,
            OrderKind::ImmediateOrCancel,
            Quantity::new(qty),
            Price::new(price),
            Timestamp::new(ts),
            agent,
        )
    }

    fn fok(side: Side, price: u64, qty: u64, ts: u64, agent: &str) -> Order {
        Order::new(
            "XYZ",
            side,
            OrderKind::FillOrKill,
            Quantity::new(qty),
            Price::new(price),
            Timestamp::new(ts),
            agent,
        )
    }

    #[test]
    fn simple_cross_produces_one_trade_and_empties_book() {
        let mut book = OrderBook::new("XYZ");
        book.submit(limit(Side::Sell, 1000, 100, 1, "seller"), Timestamp::new(1))
            .unwrap();
        let trades = book
            .submit(limit(Side::Buy, 1000, 100, 2, "buyer"), Timestamp::new(2))
            .unwrap();

        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].quantity, Quantity::new(100));
        assert_eq!(trades[0].price, Price::new(1000));
        assert!(book.best_bid().is_none());
        assert!(book.best_ask().is_none());
    }

    #[test]
    fn price_time_priority_fills_earlier_order_first() {
        let mut book = OrderBook::new("XYZ");
        book.submit(limit(Side::Sell, 1000, 50, 1, "s1"), Timestamp::new(1))
            .unwrap();
        book.submit(limit(Side::Sell, 1000, 50, 2, "s2"), Timestamp::new(2))
            .unwrap();

        let trades = book
            .submit(market(Side::Buy, 60, 3, "buyer"), Timestamp::new(3))
            .unwrap();

        assert_eq!(trades.len(), 2);
        assert_eq!(trades[0].quantity, Quantity::new(50));
        assert_eq!(trades[0].seller_agent_id, "s1");
        assert_eq!(trades[1].quantity, Quantity::new(10));
        assert_eq!(trades[1].seller_agent_id, "s2");

        let (price, qty) = book.best_ask().unwrap();
        assert_eq!(price, Price::new(1000));
        assert_eq!(qty, Quantity::new(40));
    }

    #[test]
    fn market_order_walks_levels_by_price_improvement() {
        let mut book = OrderBook::new("XYZ");
        book.submit(limit(Side::Sell, 1000, 30, 1, "s1"), Timestamp::new(1))
            .unwrap();
        book.submit(limit(Side::Sell, 1005, 30, 2, "s2"), Timestamp::new(2))
            .unwrap();

        let trades = book
            .submit(market(Side::Buy, 50, 3, "buyer"), Timestamp::new(3))
            .unwrap();

        assert_eq!(trades.len(), 2);
        assert_eq!(trades[0].price, Price::new(1000));
        assert_eq!(trades[0].quantity, Quantity::new(30));
        assert_eq!(trades[1].price, Price::new(1005));
        assert_eq!(trades[1].quantity, Quantity::new(20));

        let (price, qty) = book.best_ask().unwrap();
        assert_eq!(price, Price::new(1005));
        assert_eq!(qty, Quantity::new(10));
    }

    #[test]
    fn fok_rejects_when_liquidity_is_insufficient() {
        let mut book = OrderBook::new("XYZ");
        book.submit(limit(Side::Sell, 1000, 50, 1, "s1"), Timestamp::new(1))
            .unwrap();
        book.submit(limit(Side::Sell, 1010, 30, 2, "s2"), Timestamp::new(2))
            .unwrap();

        let trades = book
            .submit(fok(Side::Buy, 1010, 100, 3, "buyer"), Timestamp::new(3))
            .unwrap();

        assert!(trades.is_empty());
        assert!(book.trades().is_empty());
        let (price, qty) = book.best_ask().unwrap();
        assert_eq!(price, Price::new(1000));
        assert_eq!(qty, Quantity::new(50));
    }

    #[test]
    fn fok_fills_completely_when_liquidity_suffices() {
        let mut book = OrderBook::new("XYZ");
        book.submit(limit(Side::Sell, 1000, 50, 1, "s1"), Timestamp::new(1))
            .unwrap();
        book.submit(limit(Side::Sell, 1010, 50, 2, "s2"), Timestamp::new(2))
            .unwrap();

        let trades = book
            .submit(fok(Side::Buy, 1010, 80, 3, "buyer"), Timestamp::new(3))
            .unwrap();

        let total: u64 = trades.iter().map(|t| t.quantity.lots()).sum();
        assert_eq!(total, 80);
    }

    #[test]
    fn ioc_partial_fill_discards_remainder() {
        let mut book = OrderBook::new("XYZ");
        book.submit(limit(Side::Sell, 1000, 40, 1, "s1"), Timestamp::new(1))
            .unwrap();

        let trades = book
            .submit(ioc(Side::Buy, 1000, 100, 2, "buyer"), Timestamp::new(2))
            .unwrap();

        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].quantity, Quantity::new(40));
        assert!(book.best_ask().is_none());
        // the IOC's residual is discarded, not booked or cancellable
        assert_eq!(book.order_count(), 0);
    }

    #[test]
    fn market_order_against_empty_book_produces_no_trades() {
        let mut book = OrderBook::new("XYZ");
        let trades = book
            .submit(market(Side::Buy, 10, 1, "buyer"), Timestamp::new(1))
            .unwrap();
        assert!(trades.is_empty());
        assert_eq!(book.order_count(), 0);
    }

    #[test]
    fn rejects_zero_quantity() {
        let mut book = OrderBook::new("XYZ");
        let order = limit(Side::Buy, 1000, 0, 1, "buyer");
        let err = book.submit(order, Timestamp::new(1)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid order: quantity must be positive"
        );
    }

    #[test]
    fn rejects_mismatched_instrument() {
        let mut book = OrderBook::new("XYZ");
        let mut order = limit(Side::Buy, 1000, 10, 1, "buyer");
        order.instrument = "ABC".to_string();
        assert!(book.submit(order, Timestamp::new(1)).is_err());
    }

    #[test]
    fn non_crossing_limit_rests_without_trading() {
        let mut book = OrderBook::new("XYZ");
        book.submit(limit(Side::Sell, 1010, 10, 1, "s1"), Timestamp::new(1))
            .unwrap();
        let trades = book
            .submit(limit(Side::Buy, 1000, 10, 2, "buyer"), Timestamp::new(2))
            .unwrap();
        assert!(trades.is_empty());
        assert_eq!(book.best_bid(), Some((Price::new(1000), Quantity::new(10))));
        assert_eq!(book.best_ask(), Some((Price::new(1010), Quantity::new(10))));
    }

    #[test]
    fn aggressive_limit_trades_at_passive_price() {
        let mut book = OrderBook::new("XYZ");
        book.submit(limit(Side::Sell, 1000, 10, 1, "s1"), Timestamp::new(1))
            .unwrap();
        let trades = book
            .submit(limit(Side::Buy, 1005, 10, 2, "buyer"), Timestamp::new(2))
            .unwrap();
        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].price, Price::new(1000));
    }
}
