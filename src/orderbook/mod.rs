//! Order book storage.
//!
//! ## Architecture
//!
//! - **Slab-based storage**: each side stores its orders in a slab, O(1)
//!   insertion, removal and lookup through generation-checked handles
//! - **Price index**: each side maps price -> FIFO queue through the
//!   [`PriceIndex`] trait (B-tree by default)
//! - **ID index**: the book maps order ID -> side + handle
//!
//! ## Components
//!
//! - [`OrderNode`] / [`OrderHandle`]: stored order with queue links, and its location
//! - [`OrderQueue`]: orders at a single price
//! - [`OrderSide`]: bids or asks
//! - [`OrderBook`]: both sides, the ID index and the version counter
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Append order | O(log n) |
//! | Remove / update by handle | O(log n) (price lookup) |
//! | Cancel by ID | O(log n) |
//! | Best bid/ask | O(log n) |
//! | Match order | O(k log n) |

pub mod book;
pub mod index;
pub mod node;
pub mod queue;
pub mod side;

pub use book::{OrderBook, OrderLocation};
pub use index::PriceIndex;
pub use node::{OrderHandle, OrderNode};
pub use queue::OrderQueue;
pub use side::OrderSide;
