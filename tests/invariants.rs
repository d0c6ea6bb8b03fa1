//! Property tests over random operation sequences.

use std::collections::HashMap;

use limit_orderbook::{OrderBook, OrderSide, Side, Trade};
use proptest::prelude::*;
use rust_decimal::Decimal;

#[derive(Debug, Clone)]
enum Op {
    Limit { trader: u8, side: Side, amount: i64, price: i64 },
    Market { trader: u8, side: Side, amount: i64, budget: i64 },
    PostOnly { trader: u8, side: Side, amount: i64, price: i64 },
    Cancel { target: usize },
}

fn side_strategy() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::Buy), Just(Side::Sell)]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..4, side_strategy(), 1i64..50, 1i64..12).prop_map(|(trader, side, amount, price)| {
            Op::Limit { trader, side, amount, price }
        }),
        (0u8..4, side_strategy(), 1i64..50, 1i64..40).prop_map(|(trader, side, amount, budget)| {
            Op::Market { trader, side, amount, budget }
        }),
        (0u8..4, side_strategy(), 1i64..50, 1i64..12).prop_map(|(trader, side, amount, price)| {
            Op::PostOnly { trader, side, amount, price }
        }),
        (0usize..64).prop_map(|target| Op::Cancel { target }),
    ]
}

/// Amounts carry one decimal place
fn amount(units: i64) -> Decimal {
    Decimal::new(units, 1)
}

fn assert_side(side: &OrderSide) {
    let orders = side.orders();
    let total: Decimal = orders.iter().map(|o| o.amount()).sum();
    let mut prices: Vec<_> = orders.iter().map(|o| o.price()).collect();
    prices.dedup();

    assert_eq!(orders.len(), side.size());
    assert_eq!(total, side.amount());
    assert_eq!(prices.len(), side.depth());
    assert!(orders.iter().all(|o| o.amount() > Decimal::ZERO));
}

fn assert_book(book: &OrderBook) {
    assert_side(book.bids());
    assert_side(book.asks());
    assert_eq!(book.len(), book.bids().size() + book.asks().size());
    for order in book.bids().orders().iter().chain(book.asks().orders().iter()) {
        assert_eq!(book.order(order.id()), Some(order));
    }
}

/// Makers must be resting opposite orders of another trader, filled at their own price
fn assert_trades(before: &OrderBook, trades: &[Trade], taker_trader: &str, taker_side: Side) {
    let mut filled: HashMap<&str, Decimal> = HashMap::new();

    for trade in trades {
        let maker = before
            .order(trade.maker_order_id())
            .expect("maker was resting");
        assert_ne!(maker.trader_id(), taker_trader);
        assert_eq!(maker.side(), taker_side.opposite());
        assert_eq!(trade.price(), maker.price());
        assert!(trade.amount() > Decimal::ZERO);

        *filled.entry(trade.maker_order_id()).or_default() += trade.amount();
        assert!(filled[trade.maker_order_id()] <= maker.amount());
    }
}

proptest! {
    #[test]
    fn prop_book_invariants(ops in prop::collection::vec(op_strategy(), 1..64)) {
        let mut book = OrderBook::new("BTC/USD");

        for (i, op) in ops.into_iter().enumerate() {
            let id = i.to_string();
            let before = book.clone();

            match op {
                Op::Limit { trader, side, amount: units, price } => {
                    let trader = trader.to_string();
                    let trades = book
                        .process_limit_order(&id, &trader, side, amount(units), Decimal::from(price))
                        .unwrap();
                    assert_trades(&before, &trades, &trader, side);

                    // Every unit is either traded or resting at the limit
                    let traded: Decimal = trades.iter().map(|t| t.amount()).sum();
                    let rested = book.order(&id).map_or(Decimal::ZERO, |o| o.amount());
                    prop_assert_eq!(traded + rested, amount(units));
                }
                Op::Market { trader, side, amount: units, budget } => {
                    let trader = trader.to_string();
                    let trades = book
                        .process_market_order(&id, &trader, side, amount(units), Decimal::from(budget))
                        .unwrap();
                    assert_trades(&before, &trades, &trader, side);

                    let traded: Decimal = trades.iter().map(|t| t.amount()).sum();
                    prop_assert!(traded <= amount(units));
                    prop_assert!(!book.contains_order(&id));
                }
                Op::PostOnly { trader, side, amount: units, price } => {
                    let trades = book
                        .process_post_only_order(&id, &trader.to_string(), side, amount(units), Decimal::from(price))
                        .unwrap();
                    prop_assert!(trades.is_empty());
                    prop_assert_eq!(book.len(), before.len() + 1);
                }
                Op::Cancel { target } => {
                    let target = target.to_string();
                    let expected = before.order(&target).cloned();
                    prop_assert_eq!(book.cancel_order(&target), expected);
                    prop_assert!(!book.contains_order(&target));
                }
            }

            prop_assert_eq!(book.version(), before.version() + 1);
            assert_book(&book);
        }
    }

    #[test]
    fn prop_quote_is_read_only(
        ops in prop::collection::vec(op_strategy(), 1..32),
        side in side_strategy(),
        units in 1i64..200,
    ) {
        let mut book = OrderBook::new("BTC/USD");
        for (i, op) in ops.into_iter().enumerate() {
            if let Op::PostOnly { trader, side, amount: a, price } = op {
                book.process_post_only_order(&i.to_string(), &trader.to_string(), side, amount(a), Decimal::from(price))
                    .unwrap();
            }
        }
        let root = book.state_root();

        let quote = book.quote("outsider", side, amount(units)).unwrap();

        prop_assert_eq!(book.state_root(), root);
        prop_assert!(quote.remaining_amount() >= Decimal::ZERO);
        prop_assert!(quote.remaining_amount() <= amount(units));

        // Nobody is skipped, so the quote covers the opposite side up to its total
        let available = match side {
            Side::Buy => book.asks().amount(),
            Side::Sell => book.bids().amount(),
        };
        let filled = amount(units) - quote.remaining_amount();
        prop_assert_eq!(filled, available.min(amount(units)));
    }

    #[test]
    fn prop_snapshot_round_trip(ops in prop::collection::vec(op_strategy(), 1..48)) {
        let mut book = OrderBook::new("BTC/USD");
        for (i, op) in ops.into_iter().enumerate() {
            let id = i.to_string();
            match op {
                Op::Limit { trader, side, amount: a, price } => {
                    book.process_limit_order(&id, &trader.to_string(), side, amount(a), Decimal::from(price)).unwrap();
                }
                Op::PostOnly { trader, side, amount: a, price } => {
                    book.process_post_only_order(&id, &trader.to_string(), side, amount(a), Decimal::from(price)).unwrap();
                }
                Op::Market { .. } => {}
                Op::Cancel { target } => {
                    book.cancel_order(&target.to_string());
                }
            }
        }

        let restored = OrderBook::from_json(&book.to_json().unwrap()).unwrap();

        prop_assert_eq!(restored.state_root(), book.state_root());
        prop_assert_eq!(restored.depth(), book.depth());
        prop_assert_eq!(restored.version(), book.version());
    }
}
