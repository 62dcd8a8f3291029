//! Graph-subsystem error type.

use thiserror::Error;

use tc_core::EdgeId;

/// Errors produced by `tc-graph`.
///
/// Only construction-time invariant violations live here.  Unreachable
/// vertex pairs are an ordinary `None` from the router, and out-of-range ids
/// are caller bugs that panic.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("{edge} has negative weight {weight}")]
    NegativeWeight { edge: EdgeId, weight: f64 },
}

pub type GraphResult<T> = Result<T, GraphError>;
