//! Workspace base error type.
//!
//! Sub-crates define their own error enums; this one only covers failures of
//! the primitives in `tc-core` itself.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("latitude {lat} / longitude {lon} outside WGS-84 range")]
    InvalidCoordinates { lat: f64, lon: f64 },
}

pub type CoreResult<T> = Result<T, CoreError>;
