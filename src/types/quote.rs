//! Result of an indicative-fill simulation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Indicative fill for a hypothetical market order.
///
/// `price` is the cumulative notional (sum of price * matched amount);
/// `remaining_amount` is the quantity current liquidity could not absorb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    price: Decimal,
    remaining_amount: Decimal,
}

impl Quote {
    pub fn new(price: Decimal, remaining_amount: Decimal) -> Self {
        Self {
            price,
            remaining_amount,
        }
    }

    /// Cumulative notional of the fillable part
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Quantity that could not be filled
    pub fn remaining_amount(&self) -> Decimal {
        self.remaining_amount
    }

    /// True when the whole requested amount is fillable
    pub fn is_fully_fillable(&self) -> bool {
        self.remaining_amount.is_zero()
    }
}
