//! `Frontier` — the priority-ordered set of discovered-but-unsettled states.
//!
//! # Why this exists
//!
//! Dijkstra needs "give me the cheapest discovered state" repeatedly.  The
//! frontier wraps `std::collections::BinaryHeap` (a max-heap) with `Reverse`
//! ordering so `pop_min` is O(log k), and fixes the entry ordering contract
//! in one place.
//!
//! # Lazy deletion
//!
//! The heap supports no decrease-key.  When a state's best cost improves, a
//! fresh entry is pushed and the old one stays behind; it surfaces on some
//! later pop with a stale (higher) cost.  The search discards any popped
//! entry whose state is already settled — an expected artifact, not an error.
//! Consequently the frontier may briefly hold more entries than there are
//! states; it grows as needed and never drops an entry.
//!
//! # Tie-breaking
//!
//! Among equal-cost entries the pop order is unspecified.  `FrontierEntry`
//! derives a total order (cost, then node, then phase) only so `Ord` is
//! lawful; callers must not rely on the secondary keys.  Exploration order
//! among equal costs can therefore vary — the minimum cost returned by the
//! search never does.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tdr_core::{Cost, NodeId, Phase};

// ── FrontierEntry ─────────────────────────────────────────────────────────────

/// A candidate state awaiting expansion: reach `node` at `phase` for `cost`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct FrontierEntry {
    /// Accumulated cost from the start state.  First field so the derived
    /// ordering compares it before the tie-breaking keys.
    pub cost: Cost,
    pub node: NodeId,
    pub phase: Phase,
}

// ── Frontier ──────────────────────────────────────────────────────────────────

/// Unbounded binary min-heap of [`FrontierEntry`], ordered by ascending cost.
#[derive(Default)]
pub struct Frontier {
    heap: BinaryHeap<Reverse<FrontierEntry>>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size for an expected number of entries.  This only reserves —
    /// the frontier still grows past it freely.
    pub fn with_capacity(entries: usize) -> Self {
        Frontier { heap: BinaryHeap::with_capacity(entries) }
    }

    /// Insert an entry.  Amortized O(log k), k = current size.
    #[inline]
    pub fn push(&mut self, entry: FrontierEntry) {
        self.heap.push(Reverse(entry));
    }

    /// Remove and return the minimum-cost entry, or `None` when exhausted.
    /// O(log k).
    #[inline]
    pub fn pop_min(&mut self) -> Option<FrontierEntry> {
        self.heap.pop().map(|Reverse(e)| e)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
