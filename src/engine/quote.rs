//! Indicative quotes.

use rust_decimal::Decimal;

use crate::error::OrderBookError;
use crate::orderbook::OrderBook;
use crate::types::{Quote, Side};

impl OrderBook {
    /// Price a hypothetical order of `amount` against current liquidity
    ///
    /// Walks the opposite side the way an unlimited limit order would,
    /// skipping `trader_id`'s own orders, without mutating anything. The
    /// version is left alone.
    ///
    /// # Returns
    ///
    /// The cumulative notional (sum of maker price x matched amount) and the
    /// amount the book could not fill
    ///
    /// # Errors
    ///
    /// [`OrderBookError::Overflow`] when the notional exceeds the decimal range
    pub fn quote(
        &self,
        trader_id: &str,
        side: Side,
        amount: Decimal,
    ) -> Result<Quote, OrderBookError> {
        if trader_id.trim().is_empty() {
            return Err(OrderBookError::InvalidTraderId);
        }
        if amount <= Decimal::ZERO {
            return Err(OrderBookError::InvalidAmount);
        }

        let makers = self.side(side.opposite());
        let mut notional = Decimal::ZERO;
        let mut remaining = amount;
        let mut level = makers.best_queue();

        while let Some(queue) = level {
            if remaining <= Decimal::ZERO {
                break;
            }

            let candidates = makers
                .queue_orders(queue.price())
                .filter(|maker| maker.trader_id() != trader_id);

            for maker in candidates {
                let matched = remaining.min(maker.amount());
                notional = maker
                    .price()
                    .checked_mul(matched)
                    .and_then(|cost| notional.checked_add(cost))
                    .ok_or(OrderBookError::Overflow)?;
                remaining -= matched;

                if remaining <= Decimal::ZERO {
                    break;
                }
            }

            level = makers.worse_than(queue.price());
        }

        Ok(Quote::new(notional, remaining))
    }
}
