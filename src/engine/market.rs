//! Market orders: take liquidity from the best price under a price budget.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::OrderBookError;
use crate::orderbook::OrderBook;
use crate::types::{Side, Trade};

impl OrderBook {
    /// Process a market order
    ///
    /// Walks the opposite side from its best price with no price limit. Two
    /// counters bound the walk: the remaining amount, reduced by each matched
    /// quantity, and a price budget starting at `price` and reduced by the
    /// unit price of every fully consumed maker. A partially consumed maker
    /// ends the walk. Unfilled quantity is discarded, nothing rests.
    ///
    /// # Returns
    ///
    /// Trades in execution order (possibly empty), or the first validation
    /// failure. The version is bumped either way.
    pub fn process_market_order(
        &mut self,
        order_id: &str,
        trader_id: &str,
        side: Side,
        amount: Decimal,
        price: Decimal,
    ) -> Result<Vec<Trade>, OrderBookError> {
        self.versioned(|book| {
            if let Err(err) = book.validate(order_id, trader_id, amount, price) {
                debug!(symbol = %book.symbol(), order_id, error = %err, "market order rejected");
                return Err(err);
            }

            let maker_side = side.opposite();
            let mut trades = Vec::new();
            let mut remaining = amount;
            let mut budget = price;
            let mut level = book.side(maker_side).best_queue().map(|q| q.price());

            while let Some(level_price) = level {
                if remaining <= Decimal::ZERO || budget <= Decimal::ZERO {
                    break;
                }

                let mut cursor = book.side(maker_side).front(level_price);
                while let Some(handle) = cursor {
                    if remaining <= Decimal::ZERO || budget <= Decimal::ZERO {
                        break;
                    }
                    cursor = book.side(maker_side).next(handle);

                    if book.is_own_order(maker_side, handle, trader_id) {
                        continue;
                    }
                    let Some(fill) =
                        book.fill_resting(maker_side, handle, order_id, remaining, &mut trades)
                    else {
                        continue;
                    };

                    if fill.maker_filled {
                        remaining -= fill.amount;
                        budget -= fill.price;
                    } else {
                        remaining = Decimal::ZERO;
                        budget = Decimal::ZERO;
                    }
                }

                level = book
                    .side(maker_side)
                    .worse_than(level_price)
                    .map(|q| q.price());
            }

            debug!(
                symbol = %book.symbol(),
                order_id,
                trades = trades.len(),
                unfilled = %remaining,
                "market order done"
            );
            Ok(trades)
        })
    }
}
