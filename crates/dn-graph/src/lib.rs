//! dn-graph: geometric graph builder for district utility networks.
//!
//! Takes a flat collection of network elements (terminal nodes with
//! polygon footprints, connector edges with route geometry) plus a
//! snapping tolerance, and produces a topologically consistent graph:
//!
//! - coincident connector endpoints are clustered into junctions with a
//!   transitive union-find, so the result is independent of input order
//! - edges are re-expressed as junction-handle pairs
//! - topological defects (dangling ends, duplicate edges, unreachable
//!   nodes, overlapping bore fields, flow-orientation mismatches) are
//!   collected into a non-fatal [`ValidationReport`] alongside the
//!   best-effort graph
//!
//! # Example
//!
//! ```
//! use dn_geometry::Point2D;
//! use dn_graph::{EdgeKind, GraphBuilder, RouteEdge};
//!
//! let mut builder = GraphBuilder::new();
//! builder
//!     .add_edge(RouteEdge::new(
//!         "c1",
//!         EdgeKind::Electrical,
//!         vec![Point2D::new(0.0, 0.0), Point2D::new(10.0, 0.0)],
//!     ).unwrap());
//! builder
//!     .add_edge(RouteEdge::new(
//!         "c2",
//!         EdgeKind::Electrical,
//!         vec![Point2D::new(10.0, 0.005), Point2D::new(10.0, 10.0)],
//!     ).unwrap());
//!
//! let (graph, _report) = builder.build(0.01).unwrap();
//! // The two routes share a junction at (10, 0) within tolerance.
//! assert_eq!(graph.junctions().len(), 3);
//! ```

pub mod builder;
pub mod error;
pub mod graph;
pub mod input;
pub mod report;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::GraphBuilder;
pub use error::{GraphError, GraphResult};
pub use graph::{Junction, NetworkGraph, ResolvedEdge};
pub use input::{EdgeKind, RouteEdge, TerminalKind, TerminalNode};
pub use report::{Defect, ValidationReport};
