//! Ordered price index for one side of the book.
//!
//! Matching and depth extraction only walk levels through this trait
//! (`min`/`max` to start, `greater_than`/`less_than` to step), so the concrete
//! ordered structure can be swapped without touching the algorithms.

use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Unbounded};

use rust_decimal::Decimal;

use crate::orderbook::OrderQueue;

/// Ordered map from exact price to the queue resting at that price.
pub trait PriceIndex: Default {
    /// Insert or replace the queue at `price`
    fn put(&mut self, price: Decimal, queue: OrderQueue);

    fn remove(&mut self, price: &Decimal) -> Option<OrderQueue>;

    fn get(&self, price: &Decimal) -> Option<&OrderQueue>;

    fn get_mut(&mut self, price: &Decimal) -> Option<&mut OrderQueue>;

    /// Queue with the lowest price
    fn min(&self) -> Option<&OrderQueue>;

    /// Queue with the highest price
    fn max(&self) -> Option<&OrderQueue>;

    /// Queue with the highest price strictly below `price`
    fn less_than(&self, price: &Decimal) -> Option<&OrderQueue>;

    /// Queue with the lowest price strictly above `price`
    fn greater_than(&self, price: &Decimal) -> Option<&OrderQueue>;

    /// Number of indexed prices
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// B-tree backed index: O(log n) for every operation.
impl PriceIndex for BTreeMap<Decimal, OrderQueue> {
    #[inline]
    fn put(&mut self, price: Decimal, queue: OrderQueue) {
        self.insert(price, queue);
    }

    #[inline]
    fn remove(&mut self, price: &Decimal) -> Option<OrderQueue> {
        BTreeMap::remove(self, price)
    }

    #[inline]
    fn get(&self, price: &Decimal) -> Option<&OrderQueue> {
        BTreeMap::get(self, price)
    }

    #[inline]
    fn get_mut(&mut self, price: &Decimal) -> Option<&mut OrderQueue> {
        BTreeMap::get_mut(self, price)
    }

    #[inline]
    fn min(&self) -> Option<&OrderQueue> {
        self.values().next()
    }

    #[inline]
    fn max(&self) -> Option<&OrderQueue> {
        self.values().next_back()
    }

    fn less_than(&self, price: &Decimal) -> Option<&OrderQueue> {
        self.range((Unbounded, Excluded(*price)))
            .next_back()
            .map(|(_, queue)| queue)
    }

    fn greater_than(&self, price: &Decimal) -> Option<&OrderQueue> {
        self.range((Excluded(*price), Unbounded))
            .next()
            .map(|(_, queue)| queue)
    }

    #[inline]
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }
}
