//! Payload-layer error types.
//!
//! Everything here is fatal: an unresolved identifier, a conflicting
//! catalog record or a malformed payload aborts the load.

use thiserror::Error;

pub type PayloadResult<T> = Result<T, PayloadError>;

#[derive(Error, Debug)]
pub enum PayloadError {
    /// The payload is missing a required field or carries a wrong
    /// `type` discriminator.
    #[error("Schema mismatch: {what}")]
    SchemaMismatch { what: String },

    #[error("Catalog error: {0}")]
    Catalog(#[from] dn_catalog::CatalogError),

    #[error("Geometry error: {0}")]
    Geometry(#[from] dn_geometry::GeometryError),

    #[error("Network error: {0}")]
    Network(#[from] dn_network::NetworkError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
