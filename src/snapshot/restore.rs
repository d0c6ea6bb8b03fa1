//! Bulk restore from the raw `[price, amount]` representation.

use tracing::debug;
use uuid::Uuid;

use crate::error::RestoreError;
use crate::orderbook::OrderBook;
use crate::types::price::parse_decimal;
use crate::types::Side;

impl OrderBook {
    /// Warm-start a book from raw string levels
    ///
    /// `raw[0][0][1]` is the symbol, `raw[1]` holds ask `[price, amount]`
    /// pairs and `raw[2]` bid pairs. A missing ask or bid list counts as
    /// empty. Each pair is posted as a post-only order whose order and trader
    /// IDs are a fresh UUID v4; afterwards the version is set to `version`.
    ///
    /// # Example
    ///
    /// ```
    /// use limit_orderbook::OrderBook;
    ///
    /// let raw = vec![
    ///     vec![vec!["symbol".to_string(), "ETH/USD".to_string()]],
    ///     vec![vec!["2001.5".to_string(), "3".to_string()]],
    ///     vec![vec!["1999".to_string(), "1".to_string()]],
    /// ];
    ///
    /// let book = OrderBook::restore(42, &raw).unwrap();
    ///
    /// assert_eq!(book.symbol(), "ETH/USD");
    /// assert_eq!(book.version(), 42);
    /// assert_eq!(book.len(), 2);
    /// ```
    ///
    /// # Errors
    ///
    /// - [`RestoreError::MissingSymbol`] when `raw[0][0][1]` does not exist
    /// - [`RestoreError::MalformedLevel`] for an entry that is not a pair
    /// - [`RestoreError::InvalidDecimal`] for an unparsable price or amount
    /// - [`RestoreError::Rejected`] when a level fails order validation
    pub fn restore(version: u64, raw: &[Vec<Vec<String>>]) -> Result<Self, RestoreError> {
        let symbol = raw
            .first()
            .and_then(|header| header.first())
            .and_then(|entry| entry.get(1))
            .ok_or(RestoreError::MissingSymbol)?;

        let mut book = OrderBook::new(symbol.as_str());

        for (side, levels) in [(Side::Sell, raw.get(1)), (Side::Buy, raw.get(2))] {
            for (index, level) in levels.into_iter().flatten().enumerate() {
                let [price, amount] = level.as_slice() else {
                    return Err(RestoreError::MalformedLevel {
                        side: side.as_str(),
                        index,
                    });
                };
                let price = parse_decimal(price)?;
                let amount = parse_decimal(amount)?;

                let id = Uuid::new_v4().to_string();
                book.process_post_only_order(&id, &id, side, amount, price)?;
            }
        }

        book.set_version(version);
        debug!(symbol = %book.symbol(), orders = book.len(), version, "order book restored");
        Ok(book)
    }
}
