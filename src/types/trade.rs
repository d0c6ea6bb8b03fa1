//! Trade type representing a single match between two orders.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A trade represents a single match between a maker and taker order.
///
/// ## Terminology
///
/// - **Maker**: The resting order that was already in the book
/// - **Taker**: The incoming order that triggered the match
///
/// ## Price Discovery
///
/// The trade always executes at the maker's price (the resting order's price).
///
/// ## Example
///
/// ```
/// use limit_orderbook::types::Trade;
/// use rust_decimal::Decimal;
///
/// let trade = Trade::new("taker", "maker", Decimal::from(2), Decimal::from(400));
/// assert_eq!(trade.notional(), Some(Decimal::from(800)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    taker_order_id: String,
    maker_order_id: String,
    amount: Decimal,
    price: Decimal,
}

impl Trade {
    /// Create a new trade
    ///
    /// # Arguments
    ///
    /// * `taker_order_id` - ID of the incoming (taker) order
    /// * `maker_order_id` - ID of the resting (maker) order
    /// * `amount` - Matched quantity
    /// * `price` - Execution price (the maker's resting price)
    pub fn new(
        taker_order_id: impl Into<String>,
        maker_order_id: impl Into<String>,
        amount: Decimal,
        price: Decimal,
    ) -> Self {
        Self {
            taker_order_id: taker_order_id.into(),
            maker_order_id: maker_order_id.into(),
            amount,
            price,
        }
    }

    pub fn taker_order_id(&self) -> &str {
        &self.taker_order_id
    }

    pub fn maker_order_id(&self) -> &str {
        &self.maker_order_id
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Notional value of this trade (price * amount), None on overflow
    pub fn notional(&self) -> Option<Decimal> {
        self.price.checked_mul(self.amount)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
