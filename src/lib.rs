//! # Limit Order Book
//!
//! In-memory limit order book for a single instrument: resting bids and asks,
//! price-time priority matching, trades, depth and indicative quotes.
//!
//! ## Architecture
//!
//! - **Types**: value objects (Order, Trade, Depth, Quote)
//! - **OrderBook**: per-side slab storage, FIFO price queues, ordered price index
//! - **Engine**: limit, market, post-only, cancel, quote and depth operations
//! - **Snapshot**: canonical JSON shape, bulk restore, state root
//!
//! ## Design Principles
//!
//! 1. **Determinism**: identical call sequences produce identical books and trades
//! 2. **No Floating Point**: prices and amounts are exact `Decimal`s
//! 3. **Handles, not pointers**: orders live in slabs behind generation-checked handles
//! 4. **Synchronous Execution**: no I/O and no background work in any operation
//!
//! ## Example
//!
//! ```
//! use limit_orderbook::{OrderBook, Side};
//! use rust_decimal_macros::dec;
//!
//! let mut book = OrderBook::new("BTC/USD");
//! book.process_post_only_order("1", "maker", Side::Sell, dec!(2), dec!(100)).unwrap();
//!
//! let trades = book.process_limit_order("2", "taker", Side::Buy, dec!(3), dec!(100)).unwrap();
//!
//! assert_eq!(trades[0].amount(), dec!(2));
//! assert_eq!(book.best_bid(), Some(dec!(100)));
//! assert_eq!(book.version(), 2);
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Book configuration
pub mod config;

/// Error types
pub mod error;

/// Value objects: Order, Trade, Depth, Quote
pub mod types;

/// Order storage: queues, sides, the book
pub mod orderbook;

/// Matching and read operations, shared handle
pub mod engine;

/// Snapshot, restore and state root
pub mod snapshot;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use config::OrderBookConfig;
pub use engine::SharedOrderBook;
pub use error::{OrderBookError, RestoreError, SnapshotError};
pub use orderbook::{OrderBook, OrderHandle, OrderQueue, OrderSide, PriceIndex};
pub use snapshot::OrderBookSnapshot;
pub use types::{Depth, Order, PriceLevel, Quote, Side, Trade};
