//! Aggregated depth.

use crate::orderbook::{OrderBook, OrderSide};
use crate::types::{Depth, PriceLevel};

impl OrderBook {
    /// One level per occupied price: bids descending, asks ascending
    pub fn depth(&self) -> Depth {
        Depth::new(levels(self.bids()), levels(self.asks()))
    }
}

/// Walk a side from its best price outward
fn levels(side: &OrderSide) -> Vec<PriceLevel> {
    let mut levels = Vec::with_capacity(side.depth());
    let mut level = side.best_queue();

    while let Some(queue) = level {
        levels.push(PriceLevel::new(queue.price(), queue.amount()));
        level = side.worse_than(queue.price());
    }

    levels
}
