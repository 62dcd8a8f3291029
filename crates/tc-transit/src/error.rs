//! Transit-subsystem error type.

use thiserror::Error;

use tc_graph::GraphError;

#[derive(Debug, Error)]
pub enum TransitError {
    #[error("invalid routing settings: {0}")]
    InvalidSettings(String),

    #[error("routing graph construction failed: {0}")]
    Graph(#[from] GraphError),
}

pub type TransitResult<T> = Result<T, TransitError>;
