//! `tdr-route` — time-expanded shortest-path search.
//!
//! # Crate layout
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`frontier`] | `Frontier` (binary min-heap), `FrontierEntry`          |
//! | [`router`]   | `Router` trait, `SearchOutcome`, `PeriodicDijkstra`    |
//! | [`error`]    | `RouteError`, `RouteResult<T>`                         |
//!
//! # State space (summary)
//!
//! The unit of settlement is the pair **(node, phase)**, phase ∈ `[0, N)`:
//! the same node may be reached at up to `N` distinct cycle positions, each
//! with its own best cost.  Traversing any edge advances the phase by one
//! (mod `N`) and pays the weight the edge carries *at the departure phase*.
//! The engine runs Dijkstra over this expanded space and accepts the target
//! node at whichever phase it settles first.

pub mod error;
pub mod frontier;
pub mod router;


pub use error::{RouteError, RouteResult};
pub use frontier::{Frontier, FrontierEntry};
pub use router::{PeriodicDijkstra, Router, SearchOutcome};
