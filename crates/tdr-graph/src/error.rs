//! Graph-construction error type.
//!
//! All variants are invalid-topology conditions: the builder refuses to
//! produce a graph from them, and no partially built graph ever escapes.

use thiserror::Error;

use tdr_core::NodeId;

/// Errors produced by `tdr-graph` construction.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("edge source {node} out of range (node count {node_count})")]
    InvalidEdgeSource { node: NodeId, node_count: usize },

    #[error("edge target {node} out of range (node count {node_count})")]
    InvalidEdgeTarget { node: NodeId, node_count: usize },

    #[error("edge {edge} weight cycle has {got} entries, period is {period}")]
    WeightCycleLength { edge: usize, got: usize, period: u32 },
}

pub type GraphResult<T> = Result<T, GraphError>;
