//! Graph-builder error types.
//!
//! Only construction-time failures live here; topological defects found
//! during validation are collected into the non-fatal report instead.

use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Invalid tolerance: {value} (must be finite and >= 0)")]
    InvalidTolerance { value: f64 },

    #[error("Connector '{connector}' has no route vertices to attach")]
    EmptyRoute { connector: String },
}
