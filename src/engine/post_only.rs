//! Post-only orders: add liquidity, never match.

use rust_decimal::Decimal;
use tracing::{debug, trace};

use crate::error::OrderBookError;
use crate::orderbook::OrderBook;
use crate::types::{Order, Side, Trade};

impl OrderBook {
    /// Process a post-only order
    ///
    /// After validation the order rests on its own side as is, even when it
    /// would cross the opposite side.
    ///
    /// # Returns
    ///
    /// An empty trade list, or the first validation failure. The version is
    /// bumped either way.
    pub fn process_post_only_order(
        &mut self,
        order_id: &str,
        trader_id: &str,
        side: Side,
        amount: Decimal,
        price: Decimal,
    ) -> Result<Vec<Trade>, OrderBookError> {
        self.versioned(|book| {
            let checked = book
                .validate(order_id, trader_id, amount, price)
                .and_then(|()| book.check_room(side, amount));
            if let Err(err) = checked {
                debug!(symbol = %book.symbol(), order_id, error = %err, "post-only order rejected");
                return Err(err);
            }

            trace!(symbol = %book.symbol(), order_id, side = %side, amount = %amount, price = %price, "post-only order resting");
            book.insert_resting(Order::new(order_id, trader_id, side, amount, price));

            Ok(Vec::new())
        })
    }
}
