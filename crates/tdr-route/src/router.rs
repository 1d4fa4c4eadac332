//! Routing trait and default time-expanded Dijkstra implementation.
//!
//! # Pluggability
//!
//! Callers invoke routing via the [`Router`] trait, so applications can swap
//! in custom implementations (A* with a phase-aware heuristic, bounded-cost
//! variants) without touching the engine core.  The default
//! [`PeriodicDijkstra`] is sufficient for batch query evaluation.
//!
//! # Cost units
//!
//! Per-edge weights are non-negative `u32`; accumulated costs are `u64` with
//! `saturating_add`, so no sum of edge weights along any path can wrap.
//! Non-negativity is load-bearing: the early exit on settling the target is
//! only valid because costs along a path never decrease.  Negative weights
//! are unrepresentable by construction, not handled defensively.

use tdr_core::{Cost, NodeId, Phase, COST_UNKNOWN};
use tdr_graph::PeriodicGraph;

use crate::frontier::{Frontier, FrontierEntry};
use crate::{RouteError, RouteResult};

// ── SearchOutcome ─────────────────────────────────────────────────────────────

/// The result of a routing query.
///
/// `Unreachable` is a normal, expected outcome — the expanded state space
/// simply contains no path from the start state to the target node at any
/// phase.  System-level failures are [`RouteError`], never this.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SearchOutcome {
    /// The target was reached; `cost` is the minimum over all phases.
    Reached { cost: Cost },
    /// No path exists in the expanded state space.
    Unreachable,
}

impl SearchOutcome {
    /// The cost if the target was reached.
    pub fn cost(self) -> Option<Cost> {
        match self {
            SearchOutcome::Reached { cost } => Some(cost),
            SearchOutcome::Unreachable => None,
        }
    }

    pub fn is_reachable(self) -> bool {
        matches!(self, SearchOutcome::Reached { .. })
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable routing engine over a [`PeriodicGraph`].
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so a host may share one router
/// across threads.  All per-query state must be private to each
/// `shortest_cost` invocation — the graph is the only shared resource, and
/// it is read-only.
pub trait Router: Send + Sync {
    /// Minimum cost to reach `to` at *any* phase, starting from `from` at
    /// phase 0 with cost 0.
    ///
    /// Returns `Ok(SearchOutcome::Unreachable)` if no path exists.  Fails
    /// with [`RouteError::InvalidQuery`] if either endpoint is outside
    /// `[0, node_count)`.
    fn shortest_cost(
        &self,
        graph: &PeriodicGraph,
        from: NodeId,
        to: NodeId,
    ) -> RouteResult<SearchOutcome>;
}

// ── PeriodicDijkstra ──────────────────────────────────────────────────────────

/// Dijkstra's algorithm generalized to the (node, phase) state space.
///
/// A node settles independently at each of its `N` phases, so the search
/// runs over `V * N` states.  Best-cost and settled tables are dense arrays
/// of that length, freshly allocated per query and dropped on return — no
/// state survives between invocations, which is what makes sharing one
/// engine across threads trivially safe.
///
/// # Convention
///
/// `from == to` yields `Reached { cost: 0 }`: the zero-length path at phase
/// 0 is a valid path.
pub struct PeriodicDijkstra;

impl Router for PeriodicDijkstra {
    fn shortest_cost(
        &self,
        graph: &PeriodicGraph,
        from: NodeId,
        to: NodeId,
    ) -> RouteResult<SearchOutcome> {
        search(graph, from, to)
    }
}

// ── Search internals ──────────────────────────────────────────────────────────

fn search(graph: &PeriodicGraph, from: NodeId, to: NodeId) -> RouteResult<SearchOutcome> {
    let v = graph.node_count();
    for node in [from, to] {
        if node.index() >= v {
            return Err(RouteError::InvalidQuery { node, node_count: v });
        }
    }

    // Zero-length path: the start state would settle first anyway; skip the
    // table allocation.
    if from == to {
        return Ok(SearchOutcome::Reached { cost: 0 });
    }

    let period = graph.period();
    let n = period.index();

    // Dense per-query tables over the expanded state space, indexed by
    // node * N + phase.
    let mut best    = vec![COST_UNKNOWN; v * n];
    let mut settled = vec![false; v * n];

    let state = |node: NodeId, phase: Phase| node.index() * n + phase.index();

    best[state(from, Phase::ZERO)] = 0;

    let mut frontier = Frontier::with_capacity(v.min(1 << 16));
    frontier.push(FrontierEntry { cost: 0, node: from, phase: Phase::ZERO });

    while let Some(entry) = frontier.pop_min() {
        let s = state(entry.node, entry.phase);

        // Stale entry from lazy deletion — a cheaper push settled this
        // state earlier.  Discard.
        if settled[s] {
            continue;
        }
        settled[s] = true;

        // First settlement of the target node, at whichever phase surfaces
        // first, is the global minimum over all phases: every other target
        // state still in the frontier costs at least this much.
        if entry.node == to {
            return Ok(SearchOutcome::Reached { cost: entry.cost });
        }

        let next_phase = entry.phase.next(period);
        for edge in graph.out_edges(entry.node) {
            let target = graph.edge_target(edge);
            let weight = graph.weight_at(edge, entry.phase);
            let candidate = entry.cost.saturating_add(weight as Cost);

            let t = state(target, next_phase);
            if candidate < best[t] {
                best[t] = candidate;
                frontier.push(FrontierEntry {
                    cost:  candidate,
                    node:  target,
                    phase: next_phase,
                });
            }
        }
    }

    Ok(SearchOutcome::Unreachable)
}
