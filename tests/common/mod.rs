//! Shared fixtures for the integration tests.
//!
//! Books are loaded from the canonical JSON snapshot shape, the same way a
//! persisted book would be.

#![allow(dead_code)]

use limit_orderbook::{Order, OrderBook, OrderSide};
use rust_decimal::Decimal;

/// Asks 5@500 (trader 1), 2@400 (trader 2), 1@300 (trader 3)
pub const ASKS_BOOK: &str = r#"
{
    "bids": [],
    "asks": [
        { "id": "1", "traderId": "1", "side": "sell", "amount": "5", "price": "500" },
        { "id": "2", "traderId": "2", "side": "sell", "amount": "2", "price": "400" },
        { "id": "3", "traderId": "3", "side": "sell", "amount": "1", "price": "300" }
    ]
}
"#;

/// Bids 5@500 (trader 1), 1@400 (trader 2), 0.5@300 (trader 3)
pub const BIDS_BOOK: &str = r#"
{
    "bids": [
        { "id": "1", "traderId": "1", "side": "buy", "amount": "5", "price": "500" },
        { "id": "2", "traderId": "2", "side": "buy", "amount": "1", "price": "400" },
        { "id": "3", "traderId": "3", "side": "buy", "amount": "0.5", "price": "300" }
    ],
    "asks": []
}
"#;

/// Asks 2@200, 2@400, 2@600 (traders 1, 2, 3)
pub const ASK_LADDER: &str = r#"
{
    "bids": [],
    "asks": [
        { "id": "1", "traderId": "1", "side": "sell", "amount": "2", "price": "200" },
        { "id": "2", "traderId": "2", "side": "sell", "amount": "2", "price": "400" },
        { "id": "3", "traderId": "3", "side": "sell", "amount": "2", "price": "600" }
    ]
}
"#;

/// Bids 2@200, 2@400, 2@600 (traders 1, 2, 3)
pub const BID_LADDER: &str = r#"
{
    "bids": [
        { "id": "1", "traderId": "1", "side": "buy", "amount": "2", "price": "200" },
        { "id": "2", "traderId": "2", "side": "buy", "amount": "2", "price": "400" },
        { "id": "3", "traderId": "3", "side": "buy", "amount": "2", "price": "600" }
    ],
    "asks": []
}
"#;

pub fn load(json: &str) -> OrderBook {
    OrderBook::from_json(json).expect("fixture is a valid snapshot")
}

/// `(id, amount, price)` of every order on a side, in matching priority
pub fn resting(side: &OrderSide) -> Vec<(String, Decimal, Decimal)> {
    side.orders()
        .into_iter()
        .map(|o: Order| (o.id().to_string(), o.amount(), o.price()))
        .collect()
}

/// `(id, amount, price)` tuple builder for assertions
pub fn entry(id: &str, amount: Decimal, price: Decimal) -> (String, Decimal, Decimal) {
    (id.to_string(), amount, price)
}
