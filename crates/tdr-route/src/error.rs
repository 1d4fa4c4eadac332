//! Search-subsystem error type.
//!
//! An unreachable target is **not** an error — it is the
//! [`SearchOutcome::Unreachable`](crate::SearchOutcome) value.  `RouteError`
//! covers precondition violations only.

use thiserror::Error;

use tdr_core::NodeId;

/// Errors produced by `tdr-route`.
#[derive(Debug, Error)]
pub enum RouteError {
    /// A query endpoint lies outside `[0, node_count)`.
    ///
    /// Run policy: reject this query and continue with the next one.
    #[error("query node {node} out of range (node count {node_count})")]
    InvalidQuery { node: NodeId, node_count: usize },
}

pub type RouteResult<T> = Result<T, RouteError>;
