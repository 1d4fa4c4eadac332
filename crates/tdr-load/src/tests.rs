//! Unit tests for tdr-load.
//!
//! All loader tests drive the `_reader` variants from in-memory cursors; no
//! fixture files involved.

#[cfg(test)]
mod graph_loading {
    use std::io::Cursor;

    use tdr_core::{CoreError, NodeId, Phase};
    use tdr_graph::GraphError;
    use crate::{load_graph_reader, LoadError};

    const RING_CSV: &str = "\
3,2
0,1,1,10
1,2,1,1
2,0,1,1
";

    #[test]
    fn ring_roundtrip() {
        let g = load_graph_reader(Cursor::new(RING_CSV)).unwrap();
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.period().get(), 2);

        let e01 = g.out_edges(NodeId(0)).next().unwrap();
        assert_eq!(g.edge_target(e01), NodeId(1));
        assert_eq!(g.weight_at(e01, Phase(0)), 1);
        assert_eq!(g.weight_at(e01, Phase(1)), 10);
    }

    #[test]
    fn edgeless_graph() {
        let g = load_graph_reader(Cursor::new("5,1\n")).unwrap();
        assert_eq!(g.node_count(), 5);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn empty_input_rejected() {
        let err = load_graph_reader(Cursor::new("")).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn zero_period_rejected() {
        let err = load_graph_reader(Cursor::new("3,0\n")).unwrap_err();
        assert!(matches!(err, LoadError::Core(CoreError::ZeroPeriod)));
    }

    #[test]
    fn non_integer_field_rejected() {
        let err = load_graph_reader(Cursor::new("2,1\n0,x,5\n")).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn short_weight_cycle_fails_topology() {
        // Edge declares 1 weight against period 2 — construction must fail,
        // not read out of bounds.
        let err = load_graph_reader(Cursor::new("2,2\n0,1,5\n")).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Graph(GraphError::WeightCycleLength { got: 1, period: 2, .. })
        ));
    }

    #[test]
    fn out_of_range_target_fails_topology() {
        let err = load_graph_reader(Cursor::new("2,1\n0,9,5\n")).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Graph(GraphError::InvalidEdgeTarget { node: NodeId(9), .. })
        ));
    }
}

#[cfg(test)]
mod query_loading {
    use std::io::Cursor;

    use tdr_core::NodeId;
    use crate::{load_queries_reader, LoadError, Query};

    #[test]
    fn parses_batch() {
        let csv = "start,end\n0,4\n2,2\n3,0\n";
        let queries = load_queries_reader(Cursor::new(csv)).unwrap();
        assert_eq!(
            queries,
            vec![
                Query { start: NodeId(0), end: NodeId(4) },
                Query { start: NodeId(2), end: NodeId(2) },
                Query { start: NodeId(3), end: NodeId(0) },
            ]
        );
    }

    #[test]
    fn empty_batch() {
        let queries = load_queries_reader(Cursor::new("start,end\n")).unwrap();
        assert!(queries.is_empty());
    }

    #[test]
    fn malformed_row_rejected() {
        let err = load_queries_reader(Cursor::new("start,end\n0,oops\n")).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }
}

#[cfg(test)]
mod synth {
    use tdr_core::Period;
    use crate::{generate, SynthSpec};

    fn spec(seed: u64) -> SynthSpec {
        SynthSpec {
            nodes: 50,
            out_degree: 3,
            period: Period::new(4).unwrap(),
            max_weight: 100,
            seed,
        }
    }

    #[test]
    fn deterministic_per_seed() {
        let a = generate(&spec(9)).unwrap();
        let b = generate(&spec(9)).unwrap();
        assert_eq!(a.node_out_start, b.node_out_start);
        assert_eq!(a.edge_to, b.edge_to);
        assert_eq!(a.edge_weights, b.edge_weights);
    }

    #[test]
    fn different_seeds_differ() {
        let a = generate(&spec(1)).unwrap();
        let b = generate(&spec(2)).unwrap();
        assert!(a.edge_to != b.edge_to || a.edge_weights != b.edge_weights);
    }

    #[test]
    fn respects_bounds() {
        let g = generate(&spec(3)).unwrap();
        assert_eq!(g.node_count(), 50);
        for node in 0..50u32 {
            assert!(g.out_degree(tdr_core::NodeId(node)) <= 3);
        }
        assert!(g.edge_weights.iter().all(|&w| w <= 100));
    }

    #[test]
    fn no_duplicate_edges() {
        use std::collections::HashSet;
        let g = generate(&spec(4)).unwrap();
        let mut pairs = HashSet::new();
        for node in 0..50u32 {
            let n = tdr_core::NodeId(node);
            for e in g.out_edges(n) {
                assert!(pairs.insert((n, g.edge_target(e))), "duplicate edge");
            }
        }
    }

    #[test]
    fn degenerate_specs_build() {
        // Single node: every target collides with the source, so no edges.
        let g = generate(&SynthSpec {
            nodes: 1,
            out_degree: 4,
            period: Period::ONE,
            max_weight: 10,
            seed: 0,
        })
        .unwrap();
        assert_eq!(g.node_count(), 1);
        assert_eq!(g.edge_count(), 0);

        let empty = generate(&SynthSpec {
            nodes: 0,
            out_degree: 2,
            period: Period::ONE,
            max_weight: 10,
            seed: 0,
        })
        .unwrap();
        assert!(empty.is_empty());
    }
}
