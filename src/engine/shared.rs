//! Thread-safe handle over a single order book.
//!
//! One `parking_lot::RwLock` guards the whole book: mutating operations hold
//! the write lock for their full duration, reads (depth, quote, snapshot)
//! share the read lock. There is no per-level locking; the side aggregates and
//! the ID index span every level.
//!
//! ## Example
//!
//! ```
//! use limit_orderbook::{OrderBook, SharedOrderBook, Side};
//! use rust_decimal::Decimal;
//!
//! let shared = SharedOrderBook::new(OrderBook::new("BTC/USD"));
//! let writer = shared.clone();
//!
//! std::thread::spawn(move || {
//!     writer
//!         .process_post_only_order("1", "alice", Side::Buy, Decimal::ONE, Decimal::from(100))
//!         .unwrap();
//! })
//! .join()
//! .unwrap();
//!
//! assert_eq!(shared.depth().bids().len(), 1);
//! assert_eq!(shared.version(), 1);
//! ```

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};
use rust_decimal::Decimal;

use crate::error::OrderBookError;
use crate::orderbook::OrderBook;
use crate::snapshot::OrderBookSnapshot;
use crate::types::{Depth, Order, Quote, Side, Trade};

/// Cloneable single-writer / multi-reader handle
#[derive(Debug, Clone)]
pub struct SharedOrderBook {
    inner: Arc<RwLock<OrderBook>>,
}

impl SharedOrderBook {
    pub fn new(book: OrderBook) -> Self {
        Self {
            inner: Arc::new(RwLock::new(book)),
        }
    }

    // ========================================================================
    // Writers
    // ========================================================================

    pub fn process_limit_order(
        &self,
        order_id: &str,
        trader_id: &str,
        side: Side,
        amount: Decimal,
        price: Decimal,
    ) -> Result<Vec<Trade>, OrderBookError> {
        self.inner
            .write()
            .process_limit_order(order_id, trader_id, side, amount, price)
    }

    pub fn process_market_order(
        &self,
        order_id: &str,
        trader_id: &str,
        side: Side,
        amount: Decimal,
        price: Decimal,
    ) -> Result<Vec<Trade>, OrderBookError> {
        self.inner
            .write()
            .process_market_order(order_id, trader_id, side, amount, price)
    }

    pub fn process_post_only_order(
        &self,
        order_id: &str,
        trader_id: &str,
        side: Side,
        amount: Decimal,
        price: Decimal,
    ) -> Result<Vec<Trade>, OrderBookError> {
        self.inner
            .write()
            .process_post_only_order(order_id, trader_id, side, amount, price)
    }

    pub fn cancel_order(&self, order_id: &str) -> Option<Order> {
        self.inner.write().cancel_order(order_id)
    }

    pub fn reset(&self) {
        self.inner.write().reset();
    }

    // ========================================================================
    // Readers
    // ========================================================================

    pub fn depth(&self) -> Depth {
        self.inner.read().depth()
    }

    pub fn quote(
        &self,
        trader_id: &str,
        side: Side,
        amount: Decimal,
    ) -> Result<Quote, OrderBookError> {
        self.inner.read().quote(trader_id, side, amount)
    }

    pub fn version(&self) -> u64 {
        self.inner.read().version()
    }

    pub fn symbol(&self) -> String {
        self.inner.read().symbol().to_string()
    }

    pub fn snapshot(&self) -> OrderBookSnapshot {
        self.inner.read().snapshot()
    }

    pub fn state_root(&self) -> [u8; 32] {
        self.inner.read().state_root()
    }

    /// Hold the read lock for several consistent reads
    ///
    /// Writers block until the guard is dropped.
    pub fn read(&self) -> RwLockReadGuard<'_, OrderBook> {
        self.inner.read()
    }
}

impl From<OrderBook> for SharedOrderBook {
    fn from(book: OrderBook) -> Self {
        Self::new(book)
    }
}
