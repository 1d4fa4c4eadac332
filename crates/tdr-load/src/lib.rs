//! `tdr-load` — input acquisition for the rust_tdr engine.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`loader`] | `load_graph_csv`, `load_queries_csv` (+ `_reader` variants), `Query` |
//! | [`synth`]  | `SynthSpec`, `generate` — seeded synthetic networks       |
//! | [`error`]  | `LoadError`, `LoadResult<T>`                              |
//!
//! # Graph CSV format (summary)
//!
//! Headerless; the first record declares the dimensions, every following
//! record is one directed edge with its full weight cycle:
//!
//! ```csv
//! 3,2
//! 0,1,1,10
//! 1,2,1,1
//! 2,0,1,1
//! ```
//!
//! Record 1: `node_count,period`.  Edge records: `from,to,w0,...,w{N-1}`.
//! A record with the wrong number of weight fields fails graph construction
//! (weight-cycle length must equal the period exactly).

pub mod error;
pub mod loader;
pub mod synth;

#[cfg(test)]
mod tests;

pub use error::{LoadError, LoadResult};
pub use loader::{load_graph_csv, load_graph_reader, load_queries_csv, load_queries_reader, Query};
pub use synth::{generate, SynthSpec};
