//! synthbench — throughput check on a seeded synthetic network.
//!
//! Generates a mid-sized random periodic network and times a batch of
//! random queries.  Everything derives from one seed, so two runs on the
//! same machine process identical workloads.

use std::time::Instant;

use anyhow::Result;

use tdr_core::{GenRng, NodeId, Period};
use tdr_load::{generate, SynthSpec};
use tdr_route::{PeriodicDijkstra, Router, SearchOutcome};

// ── Workload constants ────────────────────────────────────────────────────────

const NODES:       u32 = 20_000;
const OUT_DEGREE:  u32 = 4;
const PERIOD:      u32 = 24;   // hourly weight bands
const MAX_WEIGHT:  u32 = 600;
const SEED:        u64 = 42;
const QUERY_COUNT: u32 = 200;

fn main() -> Result<()> {
    println!("=== synthbench — rust_tdr periodic routing ===");
    println!("Nodes: {NODES}  |  Degree: {OUT_DEGREE}  |  Period: {PERIOD}  |  Seed: {SEED}");
    println!();

    // 1. Generate the network.
    let spec = SynthSpec {
        nodes:      NODES,
        out_degree: OUT_DEGREE,
        period:     Period::new(PERIOD)?,
        max_weight: MAX_WEIGHT,
        seed:       SEED,
    };
    let t0 = Instant::now();
    let graph = generate(&spec)?;
    println!(
        "Generated {} nodes, {} edges in {:.3} s",
        graph.node_count(),
        graph.edge_count(),
        t0.elapsed().as_secs_f64()
    );

    // 2. Draw a random query batch from its own child stream.
    let mut rng = GenRng::new(SEED).child(2);
    let queries: Vec<(NodeId, NodeId)> = (0..QUERY_COUNT)
        .map(|_| (NodeId(rng.gen_range(0..NODES)), NodeId(rng.gen_range(0..NODES))))
        .collect();

    // 3. Run the batch.
    let t1 = Instant::now();
    let mut reached = 0usize;
    let mut total_cost = 0u64;
    for &(start, end) in &queries {
        match PeriodicDijkstra.shortest_cost(&graph, start, end)? {
            SearchOutcome::Reached { cost } => {
                reached += 1;
                total_cost += cost;
            }
            SearchOutcome::Unreachable => {}
        }
    }
    let elapsed = t1.elapsed();

    // 4. Summary.
    println!("Queries: {} total, {} reachable", queries.len(), reached);
    if reached > 0 {
        println!("Mean cost over reachable queries: {}", total_cost / reached as u64);
    }
    println!(
        "Batch time: {:.3} s ({:.1} queries/s)",
        elapsed.as_secs_f64(),
        queries.len() as f64 / elapsed.as_secs_f64()
    );

    Ok(())
}
