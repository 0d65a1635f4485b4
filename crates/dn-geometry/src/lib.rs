//! dn-geometry: 2D geometry primitives for district utility networks.
//!
//! Provides:
//! - `Point2D` / `Vector2D` value types with tolerance-based equivalence
//! - `LineSegment2D` as a directed origin + displacement pair
//! - `Polyline2D` / `Polygon2D` vertex sequences with area, orientation
//!   and containment queries
//!
//! Every comparison takes an explicit tolerance argument; there is no
//! implicit global tolerance. Degenerate input (zero-length segment,
//! polygon with fewer than 3 distinct vertices) is rejected at
//! construction time with [`GeometryError::Degenerate`].

pub mod error;
pub mod point;
pub mod polygon;
pub mod polyline;
pub mod segment;

// Re-exports for ergonomics
pub use error::{GeometryError, GeometryResult};
pub use point::{Point2D, Vector2D};
pub use polygon::Polygon2D;
pub use polyline::Polyline2D;
pub use segment::LineSegment2D;
