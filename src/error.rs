//! Error types for the order book
//!
//! Every error is a local, synchronous, caller-correctable condition. None of
//! them is retried internally and none of them leaves partial state behind.

use thiserror::Error;

use crate::types::Side;

/// Validation failure of a mutating book operation.
///
/// Checked in declaration order; the first failing condition is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderBookError {
    #[error("Invalid order id")]
    InvalidOrderId,

    #[error("Order already exists")]
    OrderAlreadyExists,

    #[error("Invalid trader id")]
    InvalidTraderId,

    #[error("Invalid amount")]
    InvalidAmount,

    #[error("Invalid price")]
    InvalidPrice,

    /// A computed total left the decimal range
    #[error("Arithmetic overflow")]
    Overflow,
}

/// Failure of the bulk restore from the raw price/amount representation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RestoreError {
    #[error("raw book has no symbol entry")]
    MissingSymbol,

    #[error("malformed {side} level at index {index}: expected [price, amount]")]
    MalformedLevel { side: &'static str, index: usize },

    #[error("invalid decimal: {value:?}")]
    InvalidDecimal { value: String },

    #[error("level rejected: {0}")]
    Rejected(#[from] OrderBookError),
}

/// Failure to rebuild a book from its canonical snapshot.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("snapshot json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate order id in snapshot: {order_id}")]
    DuplicateOrder { order_id: String },

    #[error("invalid order {order_id} in snapshot: {reason}")]
    InvalidOrder {
        order_id: String,
        reason: OrderBookError,
    },

    #[error("order {order_id} listed under {listed} but has side {actual}")]
    SideMismatch {
        order_id: String,
        listed: Side,
        actual: Side,
    },
}
