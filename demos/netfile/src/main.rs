//! netfile — file-driven CLI for the rust_tdr routing engine.
//!
//! ```text
//! netfile <graph.csv> <queries.csv>
//! ```
//!
//! Loads a periodic network and a query batch from disk, then prints one
//! result line per query.  Failure policy:
//!
//! - graph load / topology errors abort the run (no usable graph exists);
//! - an out-of-range query is reported to stderr and the run continues;
//! - an unreachable target is a normal result line, not an error.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};

use tdr_load::{load_graph_csv, load_queries_csv};
use tdr_route::{PeriodicDijkstra, Router, SearchOutcome};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <graph.csv> <queries.csv>", args[0]);
        return ExitCode::FAILURE;
    }

    match run(Path::new(&args[1]), Path::new(&args[2])) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(graph_path: &Path, queries_path: &Path) -> Result<()> {
    let graph = load_graph_csv(graph_path)
        .with_context(|| format!("loading graph from {}", graph_path.display()))?;
    let queries = load_queries_csv(queries_path)
        .with_context(|| format!("loading queries from {}", queries_path.display()))?;

    eprintln!(
        "loaded {} nodes, {} edges, period {}; {} queries",
        graph.node_count(),
        graph.edge_count(),
        graph.period(),
        queries.len()
    );

    let mut skipped = 0usize;
    for q in &queries {
        match PeriodicDijkstra.shortest_cost(&graph, q.start, q.end) {
            Ok(SearchOutcome::Reached { cost }) => {
                println!("{} {} {}", q.start.0, q.end.0, cost);
            }
            Ok(SearchOutcome::Unreachable) => {
                println!("{} {} no-path", q.start.0, q.end.0);
            }
            // Reject the single query, keep processing the batch.
            Err(e) => {
                skipped += 1;
                eprintln!("skipping query ({}, {}): {e}", q.start.0, q.end.0);
            }
        }
    }

    if skipped > 0 {
        eprintln!("{skipped} queries skipped");
    }
    Ok(())
}
