//! Periodic graph representation and builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing edges.
//! Given a `NodeId n`, its outgoing edges occupy the `EdgeId` range:
//!
//! ```text
//! node_out_start[n] .. node_out_start[n+1]
//! ```
//!
//! Edge arrays (`edge_to`, the weight table) are sorted by source node and
//! indexed by `EdgeId`.  Iteration over a node's outgoing edges is therefore
//! a contiguous memory scan — ideal for the relaxation inner loop.
//!
//! # Weight table
//!
//! Every edge carries a weight cycle of exactly `period` entries, flattened
//! into one `Vec<u32>`: edge `e`'s cycle is the slice
//! `edge_weights[e * N .. (e + 1) * N]`.  The weight paid when traversing
//! `e` at phase `p` is `edge_weights[e * N + p]`; [`PeriodicGraph::weight_at`]
//! wraps any phase by modulo, so callers may hand it raw elapsed step counts.
//!
//! The period is a single graph-wide constant.  The source format repeats it
//! per edge; the builder enforces that every cycle matches and stores it once.

use tdr_core::{EdgeId, NodeId, Period, Phase};

use crate::{GraphError, GraphResult};

// ── PeriodicGraph ─────────────────────────────────────────────────────────────

/// Directed graph with periodically varying edge weights, in CSR format.
///
/// Immutable once built and shared read-only across queries; all interior
/// data is plain `Vec`s, so the type is `Send + Sync` for free.  Fields are
/// `pub` for direct indexed access on hot paths.  Do not construct directly;
/// use [`PeriodicGraphBuilder`] — only the builder upholds the CSR and
/// weight-table invariants.
#[derive(Debug)]
pub struct PeriodicGraph {
    /// The graph-wide weight-cycle length `N`.
    pub period: Period,

    /// CSR row pointer.  Outgoing edges of node `n` are at EdgeIds
    /// `node_out_start[n] .. node_out_start[n+1]`.
    /// Length = `node_count + 1`.
    pub node_out_start: Vec<u32>,

    /// Destination node of each edge.  Indexed by `EdgeId`.
    pub edge_to: Vec<NodeId>,

    /// Flattened weight table: edge `e`'s cycle is
    /// `edge_weights[e * N .. (e + 1) * N]`.  Length = `edge_count * N`.
    pub edge_weights: Vec<u32>,
}

impl PeriodicGraph {
    /// Construct an empty graph with no nodes or edges and period 1.
    ///
    /// Useful as a placeholder where a graph value is required before input
    /// is loaded.  Any query against it fails the range precondition.
    pub fn empty() -> Self {
        PeriodicGraph {
            period: Period::ONE,
            node_out_start: vec![0],
            edge_to: Vec::new(),
            edge_weights: Vec::new(),
        }
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_out_start.len() - 1
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_count() == 0
    }

    /// The graph-wide weight-cycle length `N`.
    #[inline]
    pub fn period(&self) -> Period {
        self.period
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over the `EdgeId`s of all outgoing edges from `node`, in
    /// insertion order.  Empty if the node has no outgoing edges.
    ///
    /// This is a contiguous index range — no heap allocation.
    #[inline]
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        (start..end).map(|i| EdgeId(i as u32))
    }

    /// Out-degree of `node` (number of outgoing edges).
    #[inline]
    pub fn out_degree(&self, node: NodeId) -> usize {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        end - start
    }

    /// Destination node of `edge`.
    #[inline]
    pub fn edge_target(&self, edge: EdgeId) -> NodeId {
        self.edge_to[edge.index()]
    }

    // ── Weight lookup ─────────────────────────────────────────────────────

    /// Weight of `edge` at `phase`, wrapping by modulo.
    ///
    /// Defined for any phase value, reduced or not — a `Phase` produced by
    /// [`Phase::next`] is already in `[0, N)` and the modulo is a no-op.
    #[inline]
    pub fn weight_at(&self, edge: EdgeId, phase: Phase) -> u32 {
        let n = self.period.index();
        self.edge_weights[edge.index() * n + phase.index() % n]
    }

    /// Weight of `edge` after an arbitrary number of elapsed steps.
    ///
    /// Equivalent to `weight_at(edge, Phase::wrap(step, period))`; exact for
    /// any `u64` step count.
    #[inline]
    pub fn weight_at_step(&self, edge: EdgeId, step: u64) -> u32 {
        self.weight_at(edge, Phase::wrap(step, self.period))
    }

    /// The full weight cycle of `edge` as a slice of length `N`.
    #[inline]
    pub fn weight_cycle(&self, edge: EdgeId) -> &[u32] {
        let n = self.period.index();
        &self.edge_weights[edge.index() * n..(edge.index() + 1) * n]
    }
}

// ── PeriodicGraphBuilder ──────────────────────────────────────────────────────

/// Construct a [`PeriodicGraph`] incrementally, then call [`build`](Self::build).
///
/// The builder accepts nodes and directed edges in any order.  `build()`
/// validates topology, sorts edges by source node (stable — per-node
/// insertion order is preserved), and constructs the CSR arrays and the
/// flattened weight table.
///
/// # Example
///
/// ```
/// use tdr_core::Period;
/// use tdr_graph::PeriodicGraphBuilder;
///
/// let mut b = PeriodicGraphBuilder::new(Period::new(2).unwrap());
/// let a = b.add_node();
/// let c = b.add_node();
/// b.add_edge(a, c, vec![3, 7]);
/// let g = b.build().unwrap();
/// assert_eq!(g.node_count(), 2);
/// assert_eq!(g.edge_count(), 1);
/// ```
pub struct PeriodicGraphBuilder {
    period:    Period,
    node_count: usize,
    raw_edges: Vec<RawEdge>,
}

struct RawEdge {
    from:    NodeId,
    to:      NodeId,
    weights: Vec<u32>,
}

impl PeriodicGraphBuilder {
    pub fn new(period: Period) -> Self {
        Self { period, node_count: 0, raw_edges: Vec::new() }
    }

    /// Pre-allocate for the expected number of edges to reduce reallocations
    /// when bulk-loading from a file.
    pub fn with_capacity(period: Period, edges: usize) -> Self {
        Self {
            period,
            node_count: 0,
            raw_edges: Vec::with_capacity(edges),
        }
    }

    /// Add a node and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self) -> NodeId {
        let id = NodeId(self.node_count as u32);
        self.node_count += 1;
        id
    }

    /// Add `count` nodes at once.  IDs are sequential from the current count.
    pub fn add_nodes(&mut self, count: usize) {
        self.node_count += count;
    }

    /// Add a **directed** edge from `from` to `to` with the given weight
    /// cycle.  Parallel edges and self-loops are permitted.
    ///
    /// Validation is deferred to [`build`](Self::build): an out-of-range
    /// endpoint or a cycle whose length differs from the period fails there.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weights: Vec<u32>) {
        self.raw_edges.push(RawEdge { from, to, weights });
    }

    pub fn node_count(&self) -> usize { self.node_count }
    pub fn edge_count(&self) -> usize { self.raw_edges.len() }

    /// Consume the builder and produce a [`PeriodicGraph`].
    ///
    /// Fails with [`GraphError`] if any edge references a node outside
    /// `[0, node_count)` or carries a weight cycle whose length is not
    /// exactly the period.  On failure no graph is produced.
    ///
    /// Time complexity: O(E log E) for the edge sort plus O(E · N) to copy
    /// the weight table, where E = edges, N = period.
    pub fn build(self) -> GraphResult<PeriodicGraph> {
        let node_count = self.node_count;
        let edge_count = self.raw_edges.len();
        let n = self.period.index();

        // Validate before any layout work: reject bad topology outright.
        for (i, e) in self.raw_edges.iter().enumerate() {
            if e.from.index() >= node_count {
                return Err(GraphError::InvalidEdgeSource { node: e.from, node_count });
            }
            if e.to.index() >= node_count {
                return Err(GraphError::InvalidEdgeTarget { node: e.to, node_count });
            }
            if e.weights.len() != n {
                return Err(GraphError::WeightCycleLength {
                    edge:   i,
                    got:    e.weights.len(),
                    period: self.period.get(),
                });
            }
        }

        // Stable sort by source node: per-node insertion order is an
        // observable invariant (it decides tie-breaking among equal-cost
        // frontier pushes, never the returned minimum).
        let mut raw = self.raw_edges;
        raw.sort_by_key(|e| e.from.0);

        // Build edge arrays from sorted raw edges.
        let edge_to: Vec<NodeId> = raw.iter().map(|e| e.to).collect();
        let mut edge_weights: Vec<u32> = Vec::with_capacity(edge_count * n);
        for e in &raw {
            edge_weights.extend_from_slice(&e.weights);
        }

        // Build CSR row pointer (node_out_start).
        let mut node_out_start = vec![0u32; node_count + 1];
        for e in &raw {
            node_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, edge_count);

        Ok(PeriodicGraph {
            period: self.period,
            node_out_start,
            edge_to,
            edge_weights,
        })
    }
}
