//! xsmall — smallest example for the rust_tdr routing engine.
//!
//! Routes a handful of queries over a synthetic 6-node commuter network
//! with four time-of-day bands (night, morning peak, midday, evening peak).
//! Scale comment: swap the embedded CSVs for real network/query files and
//! run the `netfile` demo for production-sized inputs.

use std::io::Cursor;
use std::time::Instant;

use anyhow::Result;

use tdr_load::{load_graph_reader, load_queries_reader};
use tdr_route::{PeriodicDijkstra, Router, SearchOutcome};

// ── Embedded network ──────────────────────────────────────────────────────────

// Nodes: 0 north residential, 1 downtown, 2 commerce park,
//        3 south residential, 4 river connector, 5 island (no edges).
// Period 4: weights are travel minutes per time-of-day band.
const GRAPH_CSV: &str = "\
6,4
0,1,12,25,15,20
1,0,12,18,15,30
1,2,8,15,10,14
2,1,8,10,9,16
3,4,10,12,10,12
4,3,10,12,10,12
0,4,18,20,18,20
4,1,6,9,7,9
3,2,22,35,25,30
2,3,22,28,25,40
";

const QUERIES_CSV: &str = "\
start,end
0,2
3,1
2,0
1,1
4,3
0,5
";

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== xsmall — rust_tdr periodic routing ===");
    println!();

    // 1. Load the embedded network.
    let graph = load_graph_reader(Cursor::new(GRAPH_CSV))?;
    println!(
        "Network: {} nodes, {} edges, period {}",
        graph.node_count(),
        graph.edge_count(),
        graph.period()
    );

    // 2. Load the query batch.
    let queries = load_queries_reader(Cursor::new(QUERIES_CSV))?;
    println!("Queries: {}", queries.len());
    println!();

    // 3. Run every query through the engine.
    println!("{:<8} {:<8} {:<12}", "Start", "End", "Cost");
    println!("{}", "-".repeat(30));

    let t0 = Instant::now();
    let mut reached = 0usize;
    for q in &queries {
        let outcome = PeriodicDijkstra.shortest_cost(&graph, q.start, q.end)?;
        match outcome {
            SearchOutcome::Reached { cost } => {
                reached += 1;
                println!("{:<8} {:<8} {:<12}", q.start.0, q.end.0, cost);
            }
            SearchOutcome::Unreachable => {
                println!("{:<8} {:<8} {:<12}", q.start.0, q.end.0, "unreachable");
            }
        }
    }
    let elapsed = t0.elapsed();

    println!();
    println!(
        "{} of {} queries reachable in {:.3} ms",
        reached,
        queries.len(),
        elapsed.as_secs_f64() * 1e3
    );

    Ok(())
}
