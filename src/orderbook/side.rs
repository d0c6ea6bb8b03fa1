//! One side (bids or asks) of the order book.
//!
//! ## Architecture
//!
//! - **Slab**: storage for this side's resting orders, O(1) insert/remove
//! - **PriceIndex**: ordered price -> [`OrderQueue`] map (B-tree by default)
//! - **Aggregates**: total resting amount; `size` and `depth` are read off the
//!   slab and the index so they cannot drift from the stored orders
//!
//! ## Priority
//!
//! - **Buy** side: best price is the highest
//! - **Sell** side: best price is the lowest
//!
//! Within a price, orders are matched oldest first.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use slab::Slab;

use crate::orderbook::node::{resolve, OrderHandle};
use crate::orderbook::{OrderNode, OrderQueue, PriceIndex};
use crate::types::{Order, Side};

/// All resting orders of one side, indexed by price.
#[derive(Debug, Clone)]
pub struct OrderSide<I = BTreeMap<Decimal, OrderQueue>> {
    side: Side,

    /// Resting orders, linked into their price queues
    orders: Slab<OrderNode>,

    /// Price -> queue, only ever holds non-empty queues
    index: I,

    /// Sum of every resting order's amount
    amount: Decimal,

    /// Stamp for the next inserted node
    next_generation: u64,
}

impl<I: PriceIndex> OrderSide<I> {
    /// Create an empty side
    pub fn new(side: Side) -> Self {
        Self::with_capacity(side, 0)
    }

    /// Create an empty side with `capacity` pre-allocated order slots
    pub fn with_capacity(side: Side, capacity: usize) -> Self {
        Self {
            side,
            orders: Slab::with_capacity(capacity),
            index: I::default(),
            amount: Decimal::ZERO,
            next_generation: 0,
        }
    }

    // ========================================================================
    // Aggregates
    // ========================================================================

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Number of resting orders
    #[inline]
    pub fn size(&self) -> usize {
        self.orders.len()
    }

    /// Number of distinct occupied prices
    #[inline]
    pub fn depth(&self) -> usize {
        self.index.len()
    }

    /// Total resting amount
    #[inline]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.orders.capacity()
    }

    /// Whether `amount` more can rest here without overflowing the running totals
    ///
    /// A queue total never exceeds its side total, so one check covers both.
    #[inline]
    pub fn can_absorb(&self, amount: Decimal) -> bool {
        self.amount.checked_add(amount).is_some()
    }

    // ========================================================================
    // Order Management
    // ========================================================================

    /// Append an order to the tail of the queue at its price
    ///
    /// Creates the queue when the price is not occupied yet.
    ///
    /// # Returns
    ///
    /// The handle for O(1) update and removal of the order
    ///
    /// # Panics
    ///
    /// If the side total overflows; check [`can_absorb`](Self::can_absorb) first.
    pub fn append(&mut self, order: Order) -> OrderHandle {
        debug_assert_eq!(order.side(), self.side, "order appended to the wrong side");

        let price = order.price();
        let amount = order.amount();
        let generation = self.next_generation;
        self.next_generation += 1;

        let key = self.orders.insert(OrderNode::new(order, generation));

        if self.index.get(&price).is_none() {
            self.index.put(price, OrderQueue::new(price));
        }
        if let Some(queue) = self.index.get_mut(&price) {
            queue.push_back(key, &mut self.orders);
        }

        self.amount += amount;
        OrderHandle::new(key, generation)
    }

    /// Remove an order
    ///
    /// Drops the price queue from the index when it becomes empty.
    ///
    /// # Returns
    ///
    /// The removed order, or None if the handle is stale
    pub fn remove(&mut self, handle: OrderHandle) -> Option<Order> {
        let price = resolve(&self.orders, handle)?.order.price();
        let queue = self.index.get_mut(&price)?;

        queue.remove(handle.key(), &mut self.orders);
        if queue.is_empty() {
            self.index.remove(&price);
        }

        let node = self.orders.remove(handle.key());
        self.amount -= node.order.amount();
        Some(node.order)
    }

    /// Set the remaining amount of a resting order (partial fill)
    ///
    /// # Returns
    ///
    /// The updated order, or None if the handle is stale
    pub fn update_amount(&mut self, handle: OrderHandle, amount: Decimal) -> Option<&Order> {
        let price = resolve(&self.orders, handle)?.order.price();
        let queue = self.index.get_mut(&price)?;

        let previous = queue.update_amount(handle.key(), amount, &mut self.orders);
        self.amount = self.amount - previous + amount;

        Some(&self.orders[handle.key()].order)
    }

    /// Get a resting order by handle
    #[inline]
    pub fn order(&self, handle: OrderHandle) -> Option<&Order> {
        resolve(&self.orders, handle).map(|node| &node.order)
    }

    /// Drop every resting order
    pub fn clear(&mut self) {
        self.orders.clear();
        self.index = I::default();
        self.amount = Decimal::ZERO;
    }

    // ========================================================================
    // Price Walks
    // ========================================================================

    /// Queue at the highest price, None when the side is empty
    #[inline]
    pub fn max_price_queue(&self) -> Option<&OrderQueue> {
        self.index.max()
    }

    /// Queue at the lowest price, None when the side is empty
    #[inline]
    pub fn min_price_queue(&self) -> Option<&OrderQueue> {
        self.index.min()
    }

    /// Queue at the highest price strictly below `price`
    #[inline]
    pub fn less_than(&self, price: Decimal) -> Option<&OrderQueue> {
        self.index.less_than(&price)
    }

    /// Queue at the lowest price strictly above `price`
    #[inline]
    pub fn greater_than(&self, price: Decimal) -> Option<&OrderQueue> {
        self.index.greater_than(&price)
    }

    /// Queue at exactly `price`
    #[inline]
    pub fn queue(&self, price: Decimal) -> Option<&OrderQueue> {
        self.index.get(&price)
    }

    /// Queue at the best price for this side
    pub fn best_queue(&self) -> Option<&OrderQueue> {
        match self.side {
            Side::Buy => self.max_price_queue(),
            Side::Sell => self.min_price_queue(),
        }
    }

    /// Next queue after `price` in priority order
    pub fn worse_than(&self, price: Decimal) -> Option<&OrderQueue> {
        match self.side {
            Side::Buy => self.less_than(price),
            Side::Sell => self.greater_than(price),
        }
    }

    /// Handle of the oldest order at `price`
    pub fn front(&self, price: Decimal) -> Option<OrderHandle> {
        let key = self.index.get(&price)?.front()?;
        Some(self.orders[key].handle(key))
    }

    /// Handle of the order queued right after `handle` at the same price
    pub fn next(&self, handle: OrderHandle) -> Option<OrderHandle> {
        let key = resolve(&self.orders, handle)?.next?;
        Some(self.orders[key].handle(key))
    }

    /// Orders resting at `price`, oldest first
    pub fn queue_orders(&self, price: Decimal) -> impl Iterator<Item = &Order> + '_ {
        let head = self.index.get(&price).and_then(|queue| queue.front());
        std::iter::successors(head, move |&key| self.orders[key].next)
            .map(move |key| &self.orders[key].order)
    }

    /// All resting orders in matching priority
    ///
    /// Descending price for Buy, ascending for Sell; FIFO within a price.
    pub fn orders(&self) -> Vec<Order> {
        let mut orders = Vec::with_capacity(self.size());
        let mut level = self.best_queue();

        while let Some(queue) = level {
            orders.extend(self.queue_orders(queue.price()).cloned());
            level = self.worse_than(queue.price());
        }

        orders
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
