//! `tdr-graph` — periodic-weight directed graph model.
//!
//! # Crate layout
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`network`] | `PeriodicGraph` (CSR), `PeriodicGraphBuilder`         |
//! | [`error`]   | `GraphError`, `GraphResult<T>`                        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.        |

pub mod error;
pub mod network;

#[cfg(test)]
mod tests;

pub use error::{GraphError, GraphResult};
pub use network::{PeriodicGraph, PeriodicGraphBuilder};
