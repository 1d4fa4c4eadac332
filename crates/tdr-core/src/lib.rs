//! `tdr-core` — foundational types for the `rust_tdr` routing engine.
//!
//! This crate is a dependency of every other `tdr-*` crate.  It intentionally
//! has no `tdr-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                         |
//! |-----------|--------------------------------------------------|
//! | [`ids`]   | `NodeId`, `EdgeId`                               |
//! | [`time`]  | `Phase`, `Period` — the periodic time model      |
//! | [`rng`]   | `GenRng` (seeded workload generator RNG)         |
//! | [`error`] | `CoreError`, `CoreResult`                        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{EdgeId, NodeId};
pub use rng::GenRng;
pub use time::{Period, Phase};

/// Accumulated path cost.  Wide enough that no sum of `u32` edge weights can
/// reach it; [`COST_UNKNOWN`] is the "no cost known yet" sentinel.
pub type Cost = u64;

/// Sentinel for "state not reached yet" in best-cost tables.  Strictly
/// greater than any attainable path cost (relaxation uses `saturating_add`,
/// so even pathological inputs cannot wrap past it).
pub const COST_UNKNOWN: Cost = u64::MAX;
