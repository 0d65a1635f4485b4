//! Network-level error types.

use thiserror::Error;

pub type NetworkResult<T> = Result<T, NetworkError>;

#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] dn_catalog::CatalogError),

    #[error("Geometry error: {0}")]
    Geometry(#[from] dn_geometry::GeometryError),

    #[error("Graph error: {0}")]
    Graph(#[from] dn_graph::GraphError),

    #[error("Invalid network: {what}")]
    Invalid { what: String },
}
