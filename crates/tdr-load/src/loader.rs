//! CSV graph and query loaders.
//!
//! # Graph CSV format
//!
//! Headerless.  The first record declares the graph dimensions; every
//! following record is one directed edge carrying its full weight cycle:
//!
//! ```csv
//! 4,2
//! 0,1,3,7
//! 1,2,1,1
//! 0,3,10,2
//! ```
//!
//! | Record | Fields                                  |
//! |--------|-----------------------------------------|
//! | first  | `node_count,period`                     |
//! | rest   | `from,to,w0,w1,...,w{N-1}` (2+N fields) |
//!
//! Parallel edges and self-loops are legal and kept as distinct edges.
//! Field-count errors in edge records are left to graph construction, which
//! rejects any weight cycle whose length differs from the period.
//!
//! # Query CSV format
//!
//! Headered, `start,end`, one query per row.  The loader parses rows; it
//! does **not** range-check endpoints — rejecting an out-of-range query
//! while continuing the run is the run loop's policy, enforced by the
//! engine's precondition.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use tdr_core::{NodeId, Period};
use tdr_graph::{PeriodicGraph, PeriodicGraphBuilder};

use crate::{LoadError, LoadResult};

// ── Query ─────────────────────────────────────────────────────────────────────

/// One (start, end) routing request, as read from the query source.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Query {
    pub start: NodeId,
    pub end:   NodeId,
}

#[derive(Deserialize)]
struct QueryRecord {
    start: u32,
    end:   u32,
}

// ── Graph loading ─────────────────────────────────────────────────────────────

/// Load a [`PeriodicGraph`] from a CSV file.
pub fn load_graph_csv(path: &Path) -> LoadResult<PeriodicGraph> {
    let file = std::fs::File::open(path).map_err(LoadError::Io)?;
    load_graph_reader(file)
}

/// Like [`load_graph_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded fixtures.
pub fn load_graph_reader<R: Read>(reader: R) -> LoadResult<PeriodicGraph> {
    // Edge records have 2 + N fields while the header record has 2, so the
    // reader must accept varying record lengths.
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = csv_reader.records();

    // ── Dimension record: node_count,period ───────────────────────────────
    let dims = records
        .next()
        .ok_or_else(|| LoadError::Parse("empty input: missing node_count,period record".into()))?
        .map_err(|e| LoadError::Parse(e.to_string()))?;
    if dims.len() != 2 {
        return Err(LoadError::Parse(format!(
            "dimension record must have 2 fields (node_count,period), got {}",
            dims.len()
        )));
    }
    let node_count = parse_field(&dims, 0, "node_count")? as usize;
    let period = Period::new(parse_field(&dims, 1, "period")?)?;

    // ── Edge records: from,to,w0..w{N-1} ──────────────────────────────────
    let mut builder = PeriodicGraphBuilder::with_capacity(period, node_count * 2);
    builder.add_nodes(node_count);

    for result in records {
        let record = result.map_err(|e| LoadError::Parse(e.to_string()))?;
        if record.len() < 2 {
            return Err(LoadError::Parse(format!(
                "edge record must have at least from,to fields, got {}",
                record.len()
            )));
        }
        let from = NodeId(parse_field(&record, 0, "from")?);
        let to   = NodeId(parse_field(&record, 1, "to")?);
        let weights = (2..record.len())
            .map(|i| parse_field(&record, i, "weight"))
            .collect::<LoadResult<Vec<u32>>>()?;
        builder.add_edge(from, to, weights);
    }

    // Topology errors (bad endpoints, cycle-length mismatch) surface here.
    Ok(builder.build()?)
}

fn parse_field(record: &csv::StringRecord, i: usize, name: &str) -> LoadResult<u32> {
    let raw = record
        .get(i)
        .ok_or_else(|| LoadError::Parse(format!("missing {name} field")))?;
    raw.trim()
        .parse::<u32>()
        .map_err(|e| LoadError::Parse(format!("bad {name} field {raw:?}: {e}")))
}

// ── Query loading ─────────────────────────────────────────────────────────────

/// Load a batch of routing queries from a CSV file with a `start,end` header.
pub fn load_queries_csv(path: &Path) -> LoadResult<Vec<Query>> {
    let file = std::fs::File::open(path).map_err(LoadError::Io)?;
    load_queries_reader(file)
}

/// Like [`load_queries_csv`] but accepts any `Read` source.
pub fn load_queries_reader<R: Read>(reader: R) -> LoadResult<Vec<Query>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut queries = Vec::new();
    for result in csv_reader.deserialize::<QueryRecord>() {
        let row = result.map_err(|e| LoadError::Parse(e.to_string()))?;
        queries.push(Query {
            start: NodeId(row.start),
            end:   NodeId(row.end),
        });
    }
    Ok(queries)
}
