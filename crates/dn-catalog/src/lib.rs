//! dn-catalog: immutable property catalogs for district utility networks.
//!
//! A catalog is a mapping from identifier to a physical specification
//! record: wires, power-line templates and transformer properties on the
//! electrical side; soil, pipe and borehole constants on the thermal side.
//! Records are registered once per network/loop load, shared by reference
//! afterwards, and never embedded twice.
//!
//! Records derive serde with the exact field names of the interchange
//! payloads, so the catalog blocks of an abridged payload are these
//! records verbatim.

pub mod catalog;
pub mod error;
pub mod ghe_parameters;
pub mod power_line;
pub mod transformer_properties;
pub mod wire;

// Re-exports for ergonomics
pub use catalog::{Catalog, CatalogRecord};
pub use error::{CatalogError, CatalogResult};
pub use ghe_parameters::{BoreholeParameter, PipeParameter, SoilParameter};
pub use power_line::{Phase, PowerLine};
pub use transformer_properties::{TransformerProperties, WindingConnection};
pub use wire::{ConcentricProperties, VoltageLevel, Wire, WireType};
