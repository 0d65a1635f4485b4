//! Builder input model.
//!
//! The builder consumes flat element collections rather than the owning
//! network types, so it stays a pure function over geometry: terminal
//! nodes declare polygon footprints connectors may attach to, and route
//! edges declare the vertex chains whose endpoints get clustered.

use dn_geometry::{Point2D, Polygon2D};

use crate::error::{GraphError, GraphResult};

/// Kind of a declared terminal node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalKind {
    Substation,
    Transformer,
    GroundHeatExchanger,
}

/// A declared node with a footprint polygon.
///
/// A junction landing on the footprint boundary (within tolerance) is
/// attached to the terminal; a degree-1 junction with no terminal is a
/// dangling connector end.
#[derive(Debug, Clone, PartialEq)]
pub struct TerminalNode {
    pub identifier: String,
    pub kind: TerminalKind,
    pub geometry: Polygon2D,
}

impl TerminalNode {
    pub fn new(identifier: impl Into<String>, kind: TerminalKind, geometry: Polygon2D) -> Self {
        Self {
            identifier: identifier.into(),
            kind,
            geometry,
        }
    }
}

/// Kind of a connector edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    Electrical,
    Thermal,
}

/// A connector edge given as its full route vertex chain.
///
/// The first and last vertices are the attachment endpoints; the
/// interior vertices only matter for winding-orientation checks.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteEdge {
    pub identifier: String,
    pub kind: EdgeKind,
    vertices: Vec<Point2D>,
}

impl RouteEdge {
    pub fn new(
        identifier: impl Into<String>,
        kind: EdgeKind,
        vertices: Vec<Point2D>,
    ) -> GraphResult<Self> {
        let identifier = identifier.into();
        if vertices.len() < 2 {
            return Err(GraphError::EmptyRoute {
                connector: identifier,
            });
        }
        Ok(Self {
            identifier,
            kind,
            vertices,
        })
    }

    pub fn vertices(&self) -> &[Point2D] {
        &self.vertices
    }

    pub fn start(&self) -> Point2D {
        self.vertices[0]
    }

    pub fn end(&self) -> Point2D {
        *self.vertices.last().expect("route has >= 2 vertices")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_needs_two_vertices() {
        let err = RouteEdge::new("c1", EdgeKind::Thermal, vec![Point2D::new(0.0, 0.0)]);
        assert!(matches!(err, Err(GraphError::EmptyRoute { .. })));
    }

    #[test]
    fn endpoints_are_first_and_last() {
        let edge = RouteEdge::new(
            "c1",
            EdgeKind::Electrical,
            vec![
                Point2D::new(0.0, 0.0),
                Point2D::new(5.0, 5.0),
                Point2D::new(10.0, 0.0),
            ],
        )
        .unwrap();
        assert_eq!(edge.start(), Point2D::new(0.0, 0.0));
        assert_eq!(edge.end(), Point2D::new(10.0, 0.0));
    }
}
