//! Limit Order Book - demo binary
//!
//! Seeds a book with random post-only orders and prints its depth as JSON.
//! Reads `ORDERBOOK_*` settings from the environment and logs through
//! `RUST_LOG` (e.g. `RUST_LOG=limit_orderbook=trace`).

use limit_orderbook::{OrderBook, OrderBookConfig, Side};
use rust_decimal::Decimal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

const SEED_ORDERS: usize = 10;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = OrderBookConfig::from_env().unwrap_or_else(|err| {
        warn!(error = %err, "invalid ORDERBOOK_* environment, using defaults");
        OrderBookConfig::default()
    });
    let mut book = OrderBook::with_config(&config);

    for _ in 0..SEED_ORDERS {
        // Random bits come from the v4 UUID itself
        let id = Uuid::new_v4();
        let bits = id.as_u128();
        let side = if bits & 1 == 0 { Side::Buy } else { Side::Sell };
        let amount = Decimal::from(((bits >> 8) % 1000) as u64);
        let price = Decimal::from(((bits >> 32) % 1000) as u64);

        let id = id.to_string();
        if let Err(err) = book.process_post_only_order(&id, &id, side, amount, price) {
            warn!(order_id = %id, error = %err, "seed order rejected");
        }
    }

    info!(
        symbol = %book.symbol(),
        orders = book.len(),
        version = book.version(),
        "book seeded"
    );

    println!("{}", serde_json::to_string_pretty(&book.depth())?);
    Ok(())
}
