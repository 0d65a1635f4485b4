//! dn-network: typed utility-network elements and their owning
//! aggregates.
//!
//! An [`ElectricalNetwork`] owns one substation, transformers and
//! electrical connectors plus the wire catalog their power-line
//! templates reference. A [`GheThermalLoop`] owns ground heat
//! exchangers, thermal connectors and the loop-level soil/pipe/borehole
//! records. Both lower their elements into `dn-graph` inputs to resolve
//! junctions and collect topological defects.
//!
//! Catalog records are shared `Arc`s: two connectors referencing the
//! same power-line template hold the same specification, never a copy.

pub mod connector;
pub mod electrical;
pub mod error;
pub mod exchanger;
pub mod substation;
pub mod thermal;
pub mod transformer;

// Re-exports for ergonomics
pub use connector::{ElectricalConnector, RouteGeometry, ThermalConnector};
pub use electrical::ElectricalNetwork;
pub use error::{NetworkError, NetworkResult};
pub use exchanger::GroundHeatExchanger;
pub use substation::Substation;
pub use thermal::GheThermalLoop;
pub use transformer::Transformer;
