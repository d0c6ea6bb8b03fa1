//! Canonical snapshot of a book and the ways in and out of it.
//!
//! ## Shape
//!
//! ```json
//! {
//!   "symbol": "BTC/USD",
//!   "bids": [{ "id": "1", "traderId": "t1", "side": "buy", "amount": "10", "price": "100" }],
//!   "asks": [],
//!   "version": 1
//! }
//! ```
//!
//! Bids and asks are listed in matching priority. `symbol` and `version`
//! default to empty / 0 when absent.
//!
//! ## Entry Points
//!
//! - [`OrderBook::snapshot`] / [`OrderBook::from_snapshot`]
//! - `Serialize` / `Deserialize` for [`OrderBook`], plus [`OrderBook::to_json`] / [`OrderBook::from_json`]
//! - [`OrderBook::restore`]: bulk load from raw `[price, amount]` string pairs
//! - [`OrderBook::state_root`]: SHA-256 fingerprint of the whole book

mod restore;

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::error::{OrderBookError, SnapshotError};
use crate::orderbook::OrderBook;
use crate::types::price::{is_positive, to_canonical_string};
use crate::types::{Order, Side};

/// Flat, serializable form of an [`OrderBook`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBookSnapshot {
    #[serde(default)]
    pub symbol: String,

    #[serde(default)]
    pub bids: Vec<Order>,

    #[serde(default)]
    pub asks: Vec<Order>,

    #[serde(default)]
    pub version: u64,
}

impl OrderBook {
    /// Capture every resting order, in matching priority, plus symbol and version
    pub fn snapshot(&self) -> OrderBookSnapshot {
        OrderBookSnapshot {
            symbol: self.symbol().to_string(),
            bids: self.bids().orders(),
            asks: self.asks().orders(),
            version: self.version(),
        }
    }

    /// Rebuild a book from a snapshot
    ///
    /// Orders are appended in listed order, so FIFO position within a price
    /// follows the snapshot. The version is restored verbatim.
    ///
    /// # Errors
    ///
    /// - [`SnapshotError::DuplicateOrder`] when an ID appears twice
    /// - [`SnapshotError::InvalidOrder`] for a blank ID or trader, a
    ///   non-positive amount or price, or amounts whose side total overflows
    /// - [`SnapshotError::SideMismatch`] for an order listed under the wrong side
    pub fn from_snapshot(snapshot: OrderBookSnapshot) -> Result<Self, SnapshotError> {
        let OrderBookSnapshot {
            symbol,
            bids,
            asks,
            version,
        } = snapshot;

        let mut book = OrderBook::new(symbol);
        let mut seen = HashSet::with_capacity(bids.len() + asks.len());

        let listed = bids
            .into_iter()
            .map(|order| (Side::Buy, order))
            .chain(asks.into_iter().map(|order| (Side::Sell, order)));

        for (side, order) in listed {
            check_snapshot_order(&order, side)?;
            if !book.side(side).can_absorb(order.amount()) {
                return Err(SnapshotError::InvalidOrder {
                    order_id: order.id().to_string(),
                    reason: OrderBookError::InvalidAmount,
                });
            }
            if !seen.insert(order.id().to_string()) {
                return Err(SnapshotError::DuplicateOrder {
                    order_id: order.id().to_string(),
                });
            }
            book.insert_resting(order);
        }

        book.set_version(version);
        debug!(symbol = %book.symbol(), orders = book.len(), version, "book loaded from snapshot");
        Ok(book)
    }

    /// Serialize to the canonical JSON shape
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse and rebuild a book from canonical JSON
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: OrderBookSnapshot = serde_json::from_str(json)?;
        Self::from_snapshot(snapshot)
    }

    /// SHA-256 over symbol, version and every resting order in priority order
    ///
    /// Decimals are hashed in canonical form, so books that differ only in
    /// trailing zeros share a root.
    pub fn state_root(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();

        hash_str(&mut hasher, self.symbol());
        hasher.update(self.version().to_le_bytes());

        for side in [self.bids(), self.asks()] {
            hasher.update((side.size() as u64).to_le_bytes());
            for order in side.orders() {
                hasher.update([order.side() as u8]);
                hash_str(&mut hasher, order.id());
                hash_str(&mut hasher, order.trader_id());
                hash_str(&mut hasher, &to_canonical_string(order.amount()));
                hash_str(&mut hasher, &to_canonical_string(order.price()));
            }
        }

        let mut root = [0u8; 32];
        root.copy_from_slice(&hasher.finalize());
        root
    }

    /// State root as a hex string
    pub fn state_root_hex(&self) -> String {
        hex::encode(self.state_root())
    }
}

/// Length-prefixed so adjacent fields cannot run together
fn hash_str(hasher: &mut Sha256, value: &str) {
    hasher.update((value.len() as u64).to_le_bytes());
    hasher.update(value.as_bytes());
}

fn check_snapshot_order(order: &Order, listed: Side) -> Result<(), SnapshotError> {
    let invalid = |reason| SnapshotError::InvalidOrder {
        order_id: order.id().to_string(),
        reason,
    };

    if order.id().trim().is_empty() {
        return Err(invalid(OrderBookError::InvalidOrderId));
    }
    if order.trader_id().trim().is_empty() {
        return Err(invalid(OrderBookError::InvalidTraderId));
    }
    if !is_positive(order.amount()) {
        return Err(invalid(OrderBookError::InvalidAmount));
    }
    if !is_positive(order.price()) {
        return Err(invalid(OrderBookError::InvalidPrice));
    }
    if order.side() != listed {
        return Err(SnapshotError::SideMismatch {
            order_id: order.id().to_string(),
            listed,
            actual: order.side(),
        });
    }
    Ok(())
}

// ============================================================================
// Serde
// ============================================================================

impl Serialize for OrderBook {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.snapshot().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for OrderBook {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let snapshot = OrderBookSnapshot::deserialize(deserializer)?;
        OrderBook::from_snapshot(snapshot).map_err(serde::de::Error::custom)
    }
}
