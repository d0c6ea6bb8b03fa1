//! Value objects produced and consumed by the order book
//!
//! All types serialize to the canonical snapshot shape (camelCase fields,
//! decimals as base-10 strings).
//!
//! ## Types
//!
//! - [`Order`]: A resting or incoming order
//! - [`Side`]: Buy or Sell
//! - [`Trade`]: A single maker/taker match
//! - [`PriceLevel`] / [`Depth`]: Aggregated depth snapshot
//! - [`Quote`]: Indicative fill for a hypothetical market order

mod depth;
mod order;
mod quote;
mod trade;
pub mod price;

pub use depth::{Depth, PriceLevel};
pub use order::{Order, Side};
pub use quote::Quote;
pub use trade::Trade;
