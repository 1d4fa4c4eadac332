//! Core error type.
//!
//! Sub-crates define their own error enums and either convert `CoreError`
//! into them via `From` impls or wrap it as one variant.  Both patterns are
//! acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

/// The base error type for `tdr-core` primitives.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("period must be positive")]
    ZeroPeriod,

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `tdr-core`.
pub type CoreResult<T> = Result<T, CoreError>;
