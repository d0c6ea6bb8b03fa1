//! Matching engine: the order-processing operations of [`OrderBook`].
//!
//! ## Design Principles
//!
//! 1. **Exact math**: every price and amount is a `Decimal`
//! 2. **Synchronous execution**: each call runs to completion, no I/O, no threads
//! 3. **Price-time priority**: best price first, then FIFO
//! 4. **Self-trade prevention**: resting orders of the taker's own trader are skipped
//!
//! ## Operations
//!
//! - [`OrderBook::process_limit_order`]: match at the limit or better, rest the remainder
//! - [`OrderBook::process_market_order`]: match from the best price under a price budget
//! - [`OrderBook::process_post_only_order`]: rest without matching
//! - [`OrderBook::cancel_order`]: remove a resting order
//! - [`OrderBook::quote`]: simulate a market order without touching the book
//! - [`OrderBook::depth`]: aggregated price levels of both sides
//!
//! Every trade executes at the maker's resting price.
//!
//! ## Example
//!
//! ```
//! use limit_orderbook::{OrderBook, Side};
//! use rust_decimal::Decimal;
//!
//! let mut book = OrderBook::new("BTC/USD");
//!
//! // Resting sell order
//! book.process_post_only_order("1", "maker", Side::Sell, Decimal::from(1), Decimal::from(500))
//!     .unwrap();
//!
//! // Incoming buy order crosses it
//! let trades = book
//!     .process_limit_order("2", "taker", Side::Buy, Decimal::from(1), Decimal::from(510))
//!     .unwrap();
//!
//! assert_eq!(trades.len(), 1);
//! assert_eq!(trades[0].price(), Decimal::from(500));
//! assert!(book.is_empty());
//! ```

mod cancel;
mod depth;
mod limit;
mod market;
mod post_only;
mod quote;
pub mod shared;

pub use shared::SharedOrderBook;

use rust_decimal::Decimal;
use tracing::trace;

use crate::orderbook::{OrderBook, OrderHandle};
use crate::types::{Side, Trade};

/// Result of matching the taker against one resting order
#[derive(Debug, Clone, Copy)]
pub(crate) struct Fill {
    /// Matched quantity
    pub amount: Decimal,
    /// Maker's resting price
    pub price: Decimal,
    /// Whether the maker left the book
    pub maker_filled: bool,
}

impl OrderBook {
    /// True if the resting order at `handle` belongs to `trader_id`
    ///
    /// Stale handles count as own orders so the walk skips them.
    pub(crate) fn is_own_order(&self, side: Side, handle: OrderHandle, trader_id: &str) -> bool {
        self.side(side)
            .order(handle)
            .map_or(true, |maker| maker.trader_id() == trader_id)
    }

    /// Match up to `remaining` against the resting order at `handle`
    ///
    /// A fully consumed maker is removed from its side and the ID index; a
    /// partially consumed one keeps its place with a reduced amount.
    pub(crate) fn fill_resting(
        &mut self,
        maker_side: Side,
        handle: OrderHandle,
        taker_order_id: &str,
        remaining: Decimal,
        trades: &mut Vec<Trade>,
    ) -> Option<Fill> {
        let (maker_id, maker_amount, price) = {
            let maker = self.side(maker_side).order(handle)?;
            (maker.id().to_string(), maker.amount(), maker.price())
        };

        let fill = if remaining >= maker_amount {
            self.remove_resting(&maker_id)?;
            Fill {
                amount: maker_amount,
                price,
                maker_filled: true,
            }
        } else {
            let (book_side, _) = self.side_and_index_mut(maker_side);
            book_side.update_amount(handle, maker_amount - remaining)?;
            Fill {
                amount: remaining,
                price,
                maker_filled: false,
            }
        };

        trace!(
            symbol = %self.symbol(),
            taker = taker_order_id,
            maker = %maker_id,
            amount = %fill.amount,
            price = %fill.price,
            "trade"
        );
        trades.push(Trade::new(taker_order_id, maker_id, fill.amount, fill.price));

        Some(fill)
    }
}
