//! Unit tests for tdr-graph.
//!
//! All tests use hand-crafted graphs; no input files involved.

#[cfg(test)]
mod helpers {
    use tdr_core::{NodeId, Period};
    use crate::{PeriodicGraph, PeriodicGraphBuilder};

    /// Build a 3-node cycle 0→1→2→0 with period-2 weight cycles.
    ///
    /// Edge weights:
    ///   0→1 = [1, 10]
    ///   1→2 = [1, 1]
    ///   2→0 = [1, 1]
    pub fn ring_graph() -> (PeriodicGraph, [NodeId; 3]) {
        let mut b = PeriodicGraphBuilder::new(Period::new(2).unwrap());
        let n0 = b.add_node();
        let n1 = b.add_node();
        let n2 = b.add_node();
        b.add_edge(n0, n1, vec![1, 10]);
        b.add_edge(n1, n2, vec![1, 1]);
        b.add_edge(n2, n0, vec![1, 1]);
        (b.build().unwrap(), [n0, n1, n2])
    }
}

// ── Builder & CSR structure ───────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use tdr_core::{NodeId, Period, Phase};
    use crate::{GraphError, PeriodicGraphBuilder};

    #[test]
    fn empty_build() {
        let g = PeriodicGraphBuilder::new(Period::ONE).build().unwrap();
        assert_eq!(g.node_count(), 0);
        assert_eq!(g.edge_count(), 0);
        assert!(g.is_empty());
    }

    #[test]
    fn single_edge() {
        let mut b = PeriodicGraphBuilder::new(Period::ONE);
        let a = b.add_node();
        let c = b.add_node();
        b.add_edge(a, c, vec![5]);
        let g = b.build().unwrap();
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.out_degree(a), 1);
        assert_eq!(g.out_degree(c), 0);
    }

    #[test]
    fn csr_out_edges() {
        let (g, [n0, n1, n2]) = super::helpers::ring_graph();
        for n in [n0, n1, n2] {
            assert_eq!(g.out_degree(n), 1);
        }
        let e01 = g.out_edges(n0).next().unwrap();
        assert_eq!(g.edge_target(e01), n1);
        let e12 = g.out_edges(n1).next().unwrap();
        assert_eq!(g.edge_target(e12), n2);
        let e20 = g.out_edges(n2).next().unwrap();
        assert_eq!(g.edge_target(e20), n0);
    }

    #[test]
    fn insertion_order_preserved_per_node() {
        // Two parallel edges 0→1 plus an interleaved 0→2: after the stable
        // sort the 0→1 edges must still appear in insertion order.
        let mut b = PeriodicGraphBuilder::new(Period::ONE);
        let n0 = b.add_node();
        let n1 = b.add_node();
        let n2 = b.add_node();
        b.add_edge(n0, n1, vec![1]);
        b.add_edge(n0, n2, vec![2]);
        b.add_edge(n0, n1, vec![3]);
        let g = b.build().unwrap();

        let weights: Vec<u32> = g
            .out_edges(n0)
            .map(|e| g.weight_at(e, Phase::ZERO))
            .collect();
        assert_eq!(weights, vec![1, 2, 3]);
    }

    #[test]
    fn self_loop_allowed() {
        let mut b = PeriodicGraphBuilder::new(Period::ONE);
        let n0 = b.add_node();
        b.add_edge(n0, n0, vec![4]);
        let g = b.build().unwrap();
        assert_eq!(g.edge_target(g.out_edges(n0).next().unwrap()), n0);
    }

    #[test]
    fn bulk_add_nodes() {
        let mut b = PeriodicGraphBuilder::with_capacity(Period::ONE, 1);
        b.add_nodes(10);
        assert_eq!(b.node_count(), 10);
        b.add_edge(NodeId(9), NodeId(0), vec![1]);
        let g = b.build().unwrap();
        assert_eq!(g.node_count(), 10);
        assert_eq!(g.out_degree(NodeId(9)), 1);
    }

    // ── Invalid topology ──────────────────────────────────────────────────

    #[test]
    fn target_out_of_range_rejected() {
        let mut b = PeriodicGraphBuilder::new(Period::ONE);
        let n0 = b.add_node();
        b.add_edge(n0, NodeId(7), vec![1]);
        assert!(matches!(
            b.build(),
            Err(GraphError::InvalidEdgeTarget { node: NodeId(7), .. })
        ));
    }

    #[test]
    fn source_out_of_range_rejected() {
        let mut b = PeriodicGraphBuilder::new(Period::ONE);
        let n0 = b.add_node();
        b.add_edge(NodeId(3), n0, vec![1]);
        assert!(matches!(
            b.build(),
            Err(GraphError::InvalidEdgeSource { node: NodeId(3), .. })
        ));
    }

    #[test]
    fn short_weight_cycle_rejected() {
        let mut b = PeriodicGraphBuilder::new(Period::new(3).unwrap());
        let n0 = b.add_node();
        let n1 = b.add_node();
        b.add_edge(n0, n1, vec![1, 2]); // 2 entries, period 3
        assert!(matches!(
            b.build(),
            Err(GraphError::WeightCycleLength { edge: 0, got: 2, period: 3 })
        ));
    }

    #[test]
    fn long_weight_cycle_rejected() {
        let mut b = PeriodicGraphBuilder::new(Period::new(1).unwrap());
        let n0 = b.add_node();
        b.add_edge(n0, n0, vec![1, 2]);
        assert!(matches!(
            b.build(),
            Err(GraphError::WeightCycleLength { got: 2, period: 1, .. })
        ));
    }
}

// ── Weight lookup ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod weights {
    use tdr_core::Phase;

    #[test]
    fn weight_at_each_phase() {
        let (g, [n0, ..]) = super::helpers::ring_graph();
        let e01 = g.out_edges(n0).next().unwrap();
        assert_eq!(g.weight_at(e01, Phase(0)), 1);
        assert_eq!(g.weight_at(e01, Phase(1)), 10);
    }

    #[test]
    fn weight_at_wraps_unreduced_phase() {
        let (g, [n0, ..]) = super::helpers::ring_graph();
        let e01 = g.out_edges(n0).next().unwrap();
        // Phase 5 mod 2 = 1.
        assert_eq!(g.weight_at(e01, Phase(5)), 10);
    }

    #[test]
    fn weight_at_step_is_periodic() {
        let (g, [n0, ..]) = super::helpers::ring_graph();
        let e01 = g.out_edges(n0).next().unwrap();
        for step in 0..2u64 {
            for k in [1u64, 3, 1_000_000] {
                assert_eq!(
                    g.weight_at_step(e01, step),
                    g.weight_at_step(e01, step + k * 2)
                );
            }
        }
    }

    #[test]
    fn weight_cycle_slice() {
        let (g, [n0, ..]) = super::helpers::ring_graph();
        let e01 = g.out_edges(n0).next().unwrap();
        assert_eq!(g.weight_cycle(e01), &[1, 10]);
    }
}
