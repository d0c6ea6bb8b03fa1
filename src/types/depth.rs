//! Aggregated depth snapshot.
//!
//! Computed on demand from the book and never cached:
//!
//! - `bids`: one [`PriceLevel`] per occupied bid price, highest first
//! - `asks`: one [`PriceLevel`] per occupied ask price, lowest first

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Total resting amount at one exact price on one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceLevel {
    price: Decimal,
    amount: Decimal,
}

impl PriceLevel {
    pub fn new(price: Decimal, amount: Decimal) -> Self {
        Self { price, amount }
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }
}

/// Both sides of the book aggregated by price.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Depth {
    bids: Vec<PriceLevel>,
    asks: Vec<PriceLevel>,
}

impl Depth {
    pub fn new(bids: Vec<PriceLevel>, asks: Vec<PriceLevel>) -> Self {
        Self { bids, asks }
    }

    /// Bid levels, descending by price
    pub fn bids(&self) -> &[PriceLevel] {
        &self.bids
    }

    /// Ask levels, ascending by price
    pub fn asks(&self) -> &[PriceLevel] {
        &self.asks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_depth_json_shape() {
        let depth = Depth::new(
            vec![PriceLevel::new(dec!(600), dec!(2))],
            vec![PriceLevel::new(dec!(200), dec!(0.5))],
        );

        assert_eq!(
            serde_json::to_value(&depth).unwrap(),
            serde_json::json!({
                "bids": [{ "price": "600", "amount": "2" }],
                "asks": [{ "price": "200", "amount": "0.5" }]
            })
        );
    }

    #[test]
    fn test_depth_default_is_empty() {
        let depth = Depth::default();
        assert!(depth.bids().is_empty());
        assert!(depth.asks().is_empty());
    }
}
