//! Order node for slab-based storage.
//!
//! ## Design
//!
//! `OrderNode` wraps an `Order` with doubly-linked list pointers for
//! efficient removal from its price queue. This allows O(1) removal when
//! we hold the order's handle.
//!
//! ## Handles
//!
//! Slab keys are reused after removal, so a bare key could silently point at
//! a newer order. Every node is stamped with a generation when it is
//! inserted and an [`OrderHandle`] carries both the key and the generation.
//! A handle only resolves while the slot still holds the node it was issued for.
//!
//! ## Linked List
//!
//! Orders at the same price form a doubly-linked list:
//! - `next`: Points to the next order (newer) in the queue
//! - `prev`: Points to the previous order (older) in the queue

use slab::Slab;

use crate::types::Order;

/// Generation-checked location of a resting order inside one side's slab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrderHandle {
    key: usize,
    generation: u64,
}

impl OrderHandle {
    #[inline]
    pub(crate) fn new(key: usize, generation: u64) -> Self {
        Self { key, generation }
    }

    /// Slab slot
    #[inline]
    pub fn key(&self) -> usize {
        self.key
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Order node stored in the slab.
///
/// Contains the order data plus linked-list pointers for the price queue.
/// The pointers are slab keys (`usize`), not direct references.
#[derive(Debug, Clone)]
pub struct OrderNode {
    /// The actual order data
    pub order: Order,

    /// Stamp assigned on insertion; matched against handles
    pub generation: u64,

    /// Next order in the price queue (slab key)
    /// None if this is the tail (newest order)
    pub next: Option<usize>,

    /// Previous order in the price queue (slab key)
    /// None if this is the head (oldest order)
    pub prev: Option<usize>,
}

impl OrderNode {
    /// Create a new order node (not yet linked)
    #[inline]
    pub fn new(order: Order, generation: u64) -> Self {
        Self {
            order,
            generation,
            next: None,
            prev: None,
        }
    }

    /// Check if this node is unlinked (not part of any queue, or its only member)
    #[inline]
    pub fn is_unlinked(&self) -> bool {
        self.next.is_none() && self.prev.is_none()
    }

    /// Handle for this node when stored at `key`
    #[inline]
    pub fn handle(&self, key: usize) -> OrderHandle {
        OrderHandle::new(key, self.generation)
    }
}

/// Resolve a handle against the slab, rejecting stale ones.
#[inline]
pub(crate) fn resolve(slab: &Slab<OrderNode>, handle: OrderHandle) -> Option<&OrderNode> {
    slab.get(handle.key)
        .filter(|node| node.generation == handle.generation)
}

// ============================================================================
// Unit Tests
// ============================================================================
