//! Order book state for a single instrument.
//!
//! ## Architecture
//!
//! - **Bids / Asks**: one [`OrderSide`] each, owning their orders
//! - **HashMap**: order ID -> location (side + handle) for O(1) cancel and lookup
//! - **Version**: bumped once per mutating call, success or failure
//!
//! The matching algorithms live in [`crate::engine`] as further `impl OrderBook`
//! blocks; this module holds the state, the ID index and the validation
//! contract they share.
//!
//! ## Example
//!
//! ```
//! use limit_orderbook::{OrderBook, Side};
//! use rust_decimal::Decimal;
//!
//! let mut book = OrderBook::new("BTC/USD");
//!
//! book.process_post_only_order("1", "alice", Side::Buy, Decimal::from(10), Decimal::from(100))
//!     .unwrap();
//!
//! assert_eq!(book.best_bid(), Some(Decimal::from(100)));
//! assert_eq!(book.version(), 1);
//! ```

use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::OrderBookConfig;
use crate::error::OrderBookError;
use crate::orderbook::{OrderHandle, OrderSide};
use crate::types::{Order, Side};

/// Where a resting order lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderLocation {
    pub side: Side,
    pub handle: OrderHandle,
}

/// Limit order book for one instrument
#[derive(Debug, Clone)]
pub struct OrderBook {
    symbol: String,

    /// Incremented once per mutating call
    version: u64,

    /// Order ID -> location, holds exactly the resting orders
    orders: HashMap<String, OrderLocation>,

    bids: OrderSide,

    asks: OrderSide,
}

impl OrderBook {
    /// Create a new empty book
    pub fn new(symbol: impl Into<String>) -> Self {
        Self::with_config(&OrderBookConfig::new(symbol).with_order_capacity(0))
    }

    /// Create a book with pre-allocated capacity
    ///
    /// # Example
    ///
    /// ```
    /// use limit_orderbook::{OrderBook, OrderBookConfig};
    ///
    /// let cfg = OrderBookConfig::new("ETH/USD").with_order_capacity(10_000);
    /// let book = OrderBook::with_config(&cfg);
    ///
    /// assert_eq!(book.symbol(), "ETH/USD");
    /// assert!(book.bids().capacity() >= 10_000);
    /// ```
    pub fn with_config(config: &OrderBookConfig) -> Self {
        let capacity = config.order_capacity;
        Self {
            symbol: config.symbol.clone(),
            version: 0,
            orders: HashMap::with_capacity(capacity.saturating_mul(2)),
            bids: OrderSide::with_capacity(Side::Buy, capacity),
            asks: OrderSide::with_capacity(Side::Sell, capacity),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Instrument identifier
    #[inline]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Number of mutating calls attempted since creation (or the restored value)
    #[inline]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Total number of resting orders
    #[inline]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    #[inline]
    pub fn bids(&self) -> &OrderSide {
        &self.bids
    }

    #[inline]
    pub fn asks(&self) -> &OrderSide {
        &self.asks
    }

    /// Check if an order is resting
    #[inline]
    pub fn contains_order(&self, order_id: &str) -> bool {
        self.orders.contains_key(order_id)
    }

    /// Get a resting order by ID
    pub fn order(&self, order_id: &str) -> Option<&Order> {
        let location = self.orders.get(order_id)?;
        self.side(location.side).order(location.handle)
    }

    // ========================================================================
    // Best Bid/Ask
    // ========================================================================

    /// Highest resting buy price
    pub fn best_bid(&self) -> Option<Decimal> {
        self.bids.max_price_queue().map(|q| q.price())
    }

    /// Lowest resting sell price
    pub fn best_ask(&self) -> Option<Decimal> {
        self.asks.min_price_queue().map(|q| q.price())
    }

    /// best_ask - best_bid, None if either side is empty
    pub fn spread(&self) -> Option<Decimal> {
        Some(self.best_ask()? - self.best_bid()?)
    }

    /// Drop every resting order and reset the version to zero
    pub fn reset(&mut self) {
        debug!(symbol = %self.symbol, dropped = self.orders.len(), "order book reset");

        self.orders.clear();
        self.bids.clear();
        self.asks.clear();
        self.version = 0;
    }

    // ========================================================================
    // Engine Helpers
    // ========================================================================

    /// Shared validation of limit, market and post-only orders
    ///
    /// Checks run in a fixed order and the first failure wins.
    pub(crate) fn validate(
        &self,
        order_id: &str,
        trader_id: &str,
        amount: Decimal,
        price: Decimal,
    ) -> Result<(), OrderBookError> {
        if order_id.trim().is_empty() {
            return Err(OrderBookError::InvalidOrderId);
        }
        if self.orders.contains_key(order_id) {
            return Err(OrderBookError::OrderAlreadyExists);
        }
        if trader_id.trim().is_empty() {
            return Err(OrderBookError::InvalidTraderId);
        }
        if amount <= Decimal::ZERO {
            return Err(OrderBookError::InvalidAmount);
        }
        if price <= Decimal::ZERO {
            return Err(OrderBookError::InvalidPrice);
        }
        Ok(())
    }

    /// Reject an order whose amount would overflow its side's running totals
    ///
    /// Runs after [`validate`](Self::validate) for orders that may rest.
    pub(crate) fn check_room(&self, side: Side, amount: Decimal) -> Result<(), OrderBookError> {
        if !self.side(side).can_absorb(amount) {
            return Err(OrderBookError::InvalidAmount);
        }
        Ok(())
    }

    /// Run one mutating operation and count it, whatever its outcome
    ///
    /// The counter wraps at `u64::MAX`.
    pub(crate) fn versioned<T>(&mut self, op: impl FnOnce(&mut Self) -> T) -> T {
        let result = op(self);
        self.version = self.version.wrapping_add(1);
        result
    }

    pub(crate) fn set_version(&mut self, version: u64) {
        self.version = version;
    }

    pub(crate) fn side(&self, side: Side) -> &OrderSide {
        match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        }
    }

    /// One side together with the ID index, borrowed disjointly
    pub(crate) fn side_and_index_mut(
        &mut self,
        side: Side,
    ) -> (&mut OrderSide, &mut HashMap<String, OrderLocation>) {
        match side {
            Side::Buy => (&mut self.bids, &mut self.orders),
            Side::Sell => (&mut self.asks, &mut self.orders),
        }
    }

    /// Rest an order on its own side and index it
    pub(crate) fn insert_resting(&mut self, order: Order) -> OrderHandle {
        let side = order.side();
        let order_id = order.id().to_string();
        let (book_side, index) = self.side_and_index_mut(side);

        let handle = book_side.append(order);
        index.insert(order_id, OrderLocation { side, handle });
        handle
    }

    /// Remove a resting order from its side and the ID index
    pub(crate) fn remove_resting(&mut self, order_id: &str) -> Option<Order> {
        let location = self.orders.remove(order_id)?;
        let (book_side, _) = self.side_and_index_mut(location.side);
        book_side.remove(location.handle)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
