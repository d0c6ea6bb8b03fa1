//! FIFO queue of orders sharing one exact price.
//!
//! ## Design
//!
//! An `OrderQueue` represents all resting orders at a single price on one
//! side. Orders are maintained in a doubly-linked list threaded through the
//! side's slab for FIFO ordering (price-time priority).
//!
//! ## Queue Structure
//!
//! ```text
//! head (oldest) <-> order2 <-> order3 <-> tail (newest)
//! ```
//!
//! - New orders are appended at the tail
//! - Matching consumes orders from the head
//! - Any order can be removed in O(1) using its slab key
//!
//! Callers pass keys that are linked into this queue; the owning
//! [`OrderSide`](crate::orderbook::OrderSide) checks handles before calling in.

use rust_decimal::Decimal;
use slab::Slab;

use crate::orderbook::OrderNode;

/// A queue containing the resting orders at a single price.
///
/// The actual order data lives in the slab; this struct only
/// holds the queue metadata and the running amount.
#[derive(Debug, Clone)]
pub struct OrderQueue {
    price: Decimal,

    /// Sum of the member orders' amounts
    amount: Decimal,

    /// Oldest order (slab key), first to be matched
    head: Option<usize>,

    /// Newest order (slab key)
    tail: Option<usize>,

    len: usize,
}

impl OrderQueue {
    /// Create a new empty queue
    pub fn new(price: Decimal) -> Self {
        Self {
            price,
            amount: Decimal::ZERO,
            head: None,
            tail: None,
            len: 0,
        }
    }

    #[inline]
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Total remaining amount at this price
    #[inline]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Number of orders in the queue
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Slab key of the oldest order
    #[inline]
    pub fn front(&self) -> Option<usize> {
        self.head
    }

    /// Slab key of the newest order
    #[inline]
    pub fn back(&self) -> Option<usize> {
        self.tail
    }

    /// Add an order to the tail of the queue
    ///
    /// # Arguments
    ///
    /// * `key` - The slab key for the (unlinked) order node
    /// * `slab` - The slab containing all order nodes of this side
    pub fn push_back(&mut self, key: usize, slab: &mut Slab<OrderNode>) {
        let node = &mut slab[key];
        node.prev = self.tail;
        node.next = None;
        let amount = node.order.amount();

        match self.tail {
            Some(tail_key) => slab[tail_key].next = Some(key),
            None => self.head = Some(key),
        }

        self.tail = Some(key);
        self.len += 1;
        self.amount += amount;
    }

    /// Unlink an order from the queue by slab key
    ///
    /// The node stays in the slab; the caller removes it.
    ///
    /// # Returns
    ///
    /// The remaining amount of the unlinked order
    pub fn remove(&mut self, key: usize, slab: &mut Slab<OrderNode>) -> Decimal {
        let (prev_key, next_key, amount) = {
            let node = &slab[key];
            (node.prev, node.next, node.order.amount())
        };

        match prev_key {
            Some(prev) => slab[prev].next = next_key,
            None => self.head = next_key,
        }

        match next_key {
            Some(next) => slab[next].prev = prev_key,
            None => self.tail = prev_key,
        }

        let node = &mut slab[key];
        node.prev = None;
        node.next = None;

        self.len -= 1;
        self.amount -= amount;

        amount
    }

    /// Set an order's remaining amount, keeping the running total in sync
    ///
    /// # Returns
    ///
    /// The order's previous amount
    pub fn update_amount(
        &mut self,
        key: usize,
        amount: Decimal,
        slab: &mut Slab<OrderNode>,
    ) -> Decimal {
        let order = &mut slab[key].order;
        let previous = order.amount();

        self.amount = self.amount - previous + amount;
        order.set_amount(amount);

        previous
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
