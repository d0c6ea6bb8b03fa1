//! Order types for the limit order book.
//!
//! ## Serialization
//!
//! Orders use the canonical snapshot shape:
//!
//! ```json
//! { "id": "1", "traderId": "t1", "side": "buy", "amount": "10", "price": "100" }
//! ```
//!
//! Amounts and prices are exact decimals and always travel as base-10 strings.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ============================================================================
// Side enum
// ============================================================================

/// Order side: Buy or Sell
///
/// Serialized as `"buy"` / `"sell"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Buy order (bid) - wants to purchase the asset
    #[default]
    Buy,
    /// Sell order (ask) - wants to sell the asset
    Sell,
}

impl Side {
    /// Returns the opposite side
    pub fn opposite(self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }

    /// Lowercase name, as used on the wire
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Order struct
// ============================================================================

/// A resting or incoming order.
///
/// Orders are immutable except for `amount`, which the book decrements in
/// place on a partial fill.
///
/// ## Example
///
/// ```
/// use limit_orderbook::types::{Order, Side};
/// use rust_decimal::Decimal;
///
/// let order = Order::new("1", "alice", Side::Buy, Decimal::from(10), Decimal::from(100));
/// assert_eq!(order.side(), Side::Buy);
/// assert_eq!(order.amount(), Decimal::from(10));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    id: String,
    trader_id: String,
    side: Side,
    amount: Decimal,
    price: Decimal,
}

impl Order {
    /// Create a new order
    ///
    /// # Arguments
    ///
    /// * `id` - Caller-supplied unique order identifier
    /// * `trader_id` - Owner of the order, used for self-trade prevention
    /// * `side` - Buy or Sell
    /// * `amount` - Quantity
    /// * `price` - Limit price
    pub fn new(
        id: impl Into<String>,
        trader_id: impl Into<String>,
        side: Side,
        amount: Decimal,
        price: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            trader_id: trader_id.into(),
            side,
            amount,
            price,
        }
    }

    /// Order ID
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Trader ID
    #[inline]
    pub fn trader_id(&self) -> &str {
        &self.trader_id
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Remaining quantity
    #[inline]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    #[inline]
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Overwrite the remaining quantity.
    ///
    /// Only the owning queue calls this, so its running total stays in sync.
    #[inline]
    pub(crate) fn set_amount(&mut self, amount: Decimal) {
        self.amount = amount;
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::Buy.opposite(), Side::Sell);
        assert_eq!(Side::Sell.opposite(), Side::Buy);
    }

    #[test]
    fn test_side_display() {
        assert_eq!(Side::Buy.to_string(), "buy");
        assert_eq!(Side::Sell.to_string(), "sell");
    }

    #[test]
    fn test_side_json() {
        assert_eq!(serde_json::to_string(&Side::Buy).unwrap(), "\"buy\"");
        assert_eq!(serde_json::from_str::<Side>("\"sell\"").unwrap(), Side::Sell);
        assert!(serde_json::from_str::<Side>("\"hold\"").is_err());
    }

    #[test]
    fn test_order_new() {
        let order = Order::new("1", "alice", Side::Sell, dec!(0.5), dec!(300));

        assert_eq!(order.id(), "1");
        assert_eq!(order.trader_id(), "alice");
        assert_eq!(order.side(), Side::Sell);
        assert_eq!(order.amount(), dec!(0.5));
        assert_eq!(order.price(), dec!(300));
    }

    #[test]
    fn test_order_json_shape() {
        let order = Order::new("1", "alice", Side::Buy, dec!(2), dec!(200.5));
        let json = serde_json::to_value(&order).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": "1",
                "traderId": "alice",
                "side": "buy",
                "amount": "2",
                "price": "200.5"
            })
        );
    }

    #[test]
    fn test_order_decimal_strings_are_exact() {
        let json = r#"{"id":"9","traderId":"t","side":"sell","amount":"0.1","price":"0.30000000000000004"}"#;
        let order: Order = serde_json::from_str(json).unwrap();

        assert_eq!(order.amount(), dec!(0.1));
        assert_eq!(order.price().to_string(), "0.30000000000000004");
    }
}
