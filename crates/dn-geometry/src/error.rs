//! Geometry-specific error types.

use thiserror::Error;

pub type GeometryResult<T> = Result<T, GeometryError>;

/// Errors raised while constructing geometry primitives.
///
/// Construction-time defects are fatal: no partial object is returned,
/// so downstream code never has to re-check for degenerate shapes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("Degenerate geometry: {what}")]
    Degenerate { what: &'static str },
}
