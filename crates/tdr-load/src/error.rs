use thiserror::Error;

use tdr_core::CoreError;
use tdr_graph::GraphError;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("input parse error: {0}")]
    Parse(String),

    #[error("invalid topology: {0}")]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type LoadResult<T> = Result<T, LoadError>;
