//! A FIFO queue of resting orders that share a price.

use std::collections::VecDeque;

use crate::ids::OrderId;
use crate::order::Order;
use crate::price::{Price, Quantity};

/// All orders resting at a single price, in arrival order.
///
/// The queue is a plain `VecDeque`: cancellation of an arbitrary order is
/// O(n) in the level's depth. A doubly-linked intrusive list with an
/// id→node map would bring that down to O(1), at the cost of unsafe code;
/// this crate takes the plain-queue baseline deliberately, since the level
/// depths it targets do not make the scan a bottleneck.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde-snapshot", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceLevel {
    price: Price,
    orders: VecDeque<Order>,
    total_quantity: Quantity,
}

impl PriceLevel {
    /// Creates a new, empty level at `price`.
    pub fn new(price: Price) -> Self {
        Self {
            price,
            orders: VecDeque::new(),
            total_quantity: Quantity::new(0),
        }
    }

    /// The price this level is keyed by.
    pub fn price(&self) -> Price {
        self.price
    }

    /// The cached sum of `remaining` over every order in the queue.
    pub fn total_quantity(&self) -> Quantity {
        self.total_quantity
    }

    /// `true` when the level holds no orders.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Number of resting orders at this level.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// The order at the front of the queue (next to match), if any.
    pub fn peek(&self) -> Option<&Order> {
        self.orders.front()
    }

    /// A mutable reference to the front order, for the matcher to decrement
    /// `remaining` on during a match step.
    pub fn peek_mut(&mut self) -> Option<&mut Order> {
        self.orders.front_mut()
    }

    /// Appends `order` to the tail of the queue.
    ///
    /// Panics if `order.price` does not equal this level's price — that
    /// would mean the caller (the `OrderBook`) has a bug, not that the
    /// caller of the public API gave bad input.
    pub fn enqueue(&mut self, order: Order) {
        if order.price != self.price {
            tracing::warn!(
                order_id = %order.id,
                order_price = %order.price,
                level_price = %self.price,
                "enqueued order price does not match level price",
            );
            panic!("enqueued order price does not match level price");
        }
        self.total_quantity = self.total_quantity + order.remaining;
        self.orders.push_back(order);
    }

    /// Removes and returns the front order, adjusting `total_quantity`.
    pub fn dequeue_front(&mut self) -> Option<Order> {
        let order = self.orders.pop_front()?;
        self.total_quantity = self.total_quantity - order.remaining;
        Some(order)
    }

    /// Reduces the front order's `remaining` by `qty`, keeping the cached
    /// total in sync. Used by the matcher on a partial fill of the resting
    /// order.
    pub fn reduce_front(&mut self, qty: Quantity) {
        let Some(front) = self.orders.front_mut() else {
            tracing::warn!(price = %self.price, "reduce_front called on an empty level");
            panic!("reduce_front called on an empty level");
        };
        front.remaining = front.remaining - qty;
        self.total_quantity = self.total_quantity - qty;
    }

    /// Removes the order with the given id from anywhere in the queue,
    /// preserving the relative order of the rest. O(n) in the level depth.
    pub fn remove_by_id(&mut self, id: OrderId) -> Option<Order> {
        let position = self.orders.iter().position(|order| order.id == id)?;
        let order = self.orders.remove(position)?;
        self.total_quantity = self.total_quantity - order.remaining;
        Some(order)
    }
}
