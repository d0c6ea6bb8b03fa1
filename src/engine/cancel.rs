//! Cancellation by order ID.

use tracing::debug;

use crate::orderbook::OrderBook;
use crate::types::Order;

impl OrderBook {
    /// Cancel a resting order
    ///
    /// An unknown ID is not an error. The version is bumped in both cases.
    ///
    /// # Returns
    ///
    /// The removed order, or None if no order rests under `order_id`
    pub fn cancel_order(&mut self, order_id: &str) -> Option<Order> {
        self.versioned(|book| {
            let removed = book.remove_resting(order_id);
            debug!(
                symbol = %book.symbol(),
                order_id,
                found = removed.is_some(),
                "cancel order"
            );
            removed
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Side;
    use rust_decimal_macros::dec;

    #[test]
    fn test_cancel_resting() {
        let mut book = OrderBook::new("BTC/USD");
        book.insert_resting(Order::new("1", "t", Side::Sell, dec!(2), dec!(200)));
        book.insert_resting(Order::new("2", "t", Side::Sell, dec!(2), dec!(200)));

        let cancelled = book.cancel_order("1").unwrap();

        assert_eq!(cancelled.id(), "1");
        assert_eq!(book.version(), 1);
        assert!(!book.contains_order("1"));
        assert_eq!(book.asks().queue(dec!(200)).map(|q| q.amount()), Some(dec!(2)));
    }

    #[test]
    fn test_cancel_missing() {
        let mut book = OrderBook::new("BTC/USD");

        assert!(book.cancel_order("missing").is_none());
        assert_eq!(book.version(), 1);
    }
}
