//! Limit orders: match at the limit price or better, rest the remainder.

use rust_decimal::Decimal;
use tracing::{debug, trace};

use crate::error::OrderBookError;
use crate::orderbook::OrderBook;
use crate::types::{Order, Side, Trade};

impl OrderBook {
    /// Process a limit order
    ///
    /// Walks the opposite side from its best price while the level satisfies
    /// the limit (a Buy takes asks priced at or below `price`, a Sell takes bids
    /// priced at or above it), FIFO within each level. Resting orders of the
    /// same trader are skipped and left untouched. Whatever is not filled
    /// rests on the order's own side at `price`.
    ///
    /// # Arguments
    ///
    /// * `order_id` - Unique, non-blank order ID
    /// * `trader_id` - Non-blank trader ID, used for self-trade prevention
    /// * `side` - Side of the incoming order
    /// * `amount` - Quantity, must be positive
    /// * `price` - Limit price, must be positive
    ///
    /// # Returns
    ///
    /// Trades in execution order (possibly empty), or the first validation
    /// failure. The version is bumped either way.
    pub fn process_limit_order(
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
                debug!(symbol = %book.symbol(), order_id, error = %err, "limit order rejected");
                return Err(err);
            }

            let maker_side = side.opposite();
            let crosses = |level: Decimal| match side {
                Side::Buy => price >= level,
                Side::Sell => price <= level,
            };

            let mut trades = Vec::new();
            let mut remaining = amount;
            let mut level = book.side(maker_side).best_queue().map(|q| q.price());

            while let Some(level_price) = level {
                if remaining <= Decimal::ZERO || !crosses(level_price) {
                    break;
                }

                // Resolve the next level first, this one may disappear while matching
                let mut cursor = book.side(maker_side).front(level_price);
                level = book
                    .side(maker_side)
                    .worse_than(level_price)
                    .map(|q| q.price());

                while let Some(handle) = cursor {
                    if remaining <= Decimal::ZERO {
                        break;
                    }
                    cursor = book.side(maker_side).next(handle);

                    if book.is_own_order(maker_side, handle, trader_id) {
                        continue;
                    }
                    if let Some(fill) =
                        book.fill_resting(maker_side, handle, order_id, remaining, &mut trades)
                    {
                        remaining -= fill.amount;
                    }
                }
            }

            if remaining > Decimal::ZERO {
                trace!(symbol = %book.symbol(), order_id, amount = %remaining, price = %price, "limit remainder resting");
                book.insert_resting(Order::new(order_id, trader_id, side, remaining, price));
            }

            Ok(trades)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn book_with_asks() -> OrderBook {
        let mut book = OrderBook::new("BTC/USD");
        book.insert_resting(Order::new("1", "x", Side::Sell, dec!(5), dec!(500)));
        book.insert_resting(Order::new("2", "x", Side::Sell, dec!(2), dec!(400)));
        book.insert_resting(Order::new("3", "x", Side::Sell, dec!(1), dec!(300)));
        book
    }

    #[test]
    fn test_limit_sweeps_and_rests() {
        let mut book = book_with_asks();

        let trades = book
            .process_limit_order("4", "y", Side::Buy, dec!(10), dec!(500))
            .unwrap();

        let expected = vec![
            Trade::new("4", "3", dec!(1), dec!(300)),
            Trade::new("4", "2", dec!(2), dec!(400)),
            Trade::new("4", "1", dec!(5), dec!(500)),
        ];
        assert_eq!(trades, expected);

        assert!(book.asks().is_empty());
        let rest = book.order("4").unwrap();
        assert_eq!(rest.amount(), dec!(2));
        assert_eq!(rest.price(), dec!(500));
        assert_eq!(book.version(), 1);
    }

    #[test]
    fn test_limit_stops_at_price() {
        let mut book = book_with_asks();

        let trades = book
            .process_limit_order("4", "y", Side::Buy, dec!(10), dec!(350))
            .unwrap();

        assert_eq!(trades, vec![Trade::new("4", "3", dec!(1), dec!(300))]);
        assert_eq!(book.order("4").map(|o| o.amount()), Some(dec!(9)));
        assert_eq!(book.best_ask(), Some(dec!(400)));
        assert_eq!(book.best_bid(), Some(dec!(350)));
    }

    #[test]
    fn test_limit_partial_fill_keeps_maker() {
        let mut book = book_with_asks();

        let trades = book
            .process_limit_order("4", "y", Side::Buy, dec!(0.5), dec!(300))
            .unwrap();

        assert_eq!(trades, vec![Trade::new("4", "3", dec!(0.5), dec!(300))]);
        assert_eq!(book.order("3").map(|o| o.amount()), Some(dec!(0.5)));
        assert!(!book.contains_order("4"));
        assert_eq!(book.asks().amount(), dec!(7.5));
    }

    #[test]
    fn test_limit_skips_own_orders() {
        let mut book = book_with_asks();

        let trades = book
            .process_limit_order("4", "x", Side::Buy, dec!(1), dec!(500))
            .unwrap();

        assert!(trades.is_empty());
        assert_eq!(book.asks().size(), 3);
        assert_eq!(book.best_bid(), Some(dec!(500)));
    }

    #[test]
    fn test_limit_rejection_bumps_version() {
        let mut book = book_with_asks();

        let err = book
            .process_limit_order("1", "y", Side::Buy, dec!(1), dec!(500))
            .unwrap_err();

        assert_eq!(err, OrderBookError::OrderAlreadyExists);
        assert_eq!(book.version(), 1);
        assert_eq!(book.len(), 3);
        assert_eq!(book.asks().amount(), dec!(8));
    }

    #[test]
    fn test_limit_rejects_total_overflow_before_matching() {
        let mut book = book_with_asks();
        book.insert_resting(Order::new("9", "z", Side::Buy, Decimal::MAX, dec!(100)));

        let err = book
            .process_limit_order("10", "y", Side::Buy, dec!(1), dec!(500))
            .unwrap_err();

        // Nothing matched against the crossing asks
        assert_eq!(err, OrderBookError::InvalidAmount);
        assert_eq!(book.asks().amount(), dec!(8));
        assert!(!book.contains_order("10"));
    }
}
