//! Connector edges: electrical and thermal.

use std::sync::Arc;

use dn_catalog::PowerLine;
use dn_core::Real;
use dn_geometry::{LineSegment2D, Point2D, Polyline2D, Vector2D};

/// Route geometry shared by both connector kinds: a straight segment or
/// a multi-vertex polyline.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteGeometry {
    Segment(LineSegment2D),
    Polyline(Polyline2D),
}

impl RouteGeometry {
    pub fn start(&self) -> Point2D {
        match self {
            RouteGeometry::Segment(segment) => segment.p1(),
            RouteGeometry::Polyline(polyline) => polyline.first(),
        }
    }

    pub fn end(&self) -> Point2D {
        match self {
            RouteGeometry::Segment(segment) => segment.p2(),
            RouteGeometry::Polyline(polyline) => polyline.last(),
        }
    }

    /// All route vertices, endpoints included.
    pub fn vertices(&self) -> Vec<Point2D> {
        match self {
            RouteGeometry::Segment(segment) => vec![segment.p1(), segment.p2()],
            RouteGeometry::Polyline(polyline) => polyline.vertices().to_vec(),
        }
    }

    pub fn length(&self) -> Real {
        match self {
            RouteGeometry::Segment(segment) => segment.length(),
            RouteGeometry::Polyline(polyline) => polyline.length(),
        }
    }

    pub fn translate(&self, vector: Vector2D) -> RouteGeometry {
        match self {
            RouteGeometry::Segment(s) => RouteGeometry::Segment(s.translate(vector)),
            RouteGeometry::Polyline(p) => RouteGeometry::Polyline(p.translate(vector)),
        }
    }

    pub fn rotate(&self, angle: Real, origin: &Point2D) -> RouteGeometry {
        match self {
            RouteGeometry::Segment(s) => RouteGeometry::Segment(s.rotate(angle, origin)),
            RouteGeometry::Polyline(p) => RouteGeometry::Polyline(p.rotate(angle, origin)),
        }
    }

    pub fn scale(&self, factor: Real, origin: &Point2D) -> RouteGeometry {
        match self {
            RouteGeometry::Segment(s) => RouteGeometry::Segment(s.scale(factor, origin)),
            RouteGeometry::Polyline(p) => RouteGeometry::Polyline(p.scale(factor, origin)),
        }
    }

    pub fn reflect(&self, origin: &Point2D, axis: Vector2D) -> RouteGeometry {
        match self {
            RouteGeometry::Segment(s) => RouteGeometry::Segment(s.reflect(origin, axis)),
            RouteGeometry::Polyline(p) => RouteGeometry::Polyline(p.reflect(origin, axis)),
        }
    }
}

/// An electrical distribution line between two attachment points,
/// carrying a reference to its power-line template.
#[derive(Debug, Clone, PartialEq)]
pub struct ElectricalConnector {
    pub identifier: String,
    pub display_name: Option<String>,
    pub geometry: RouteGeometry,
    pub power_line: Arc<PowerLine>,
}

impl ElectricalConnector {
    pub fn new(
        identifier: impl Into<String>,
        geometry: RouteGeometry,
        power_line: Arc<PowerLine>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            display_name: None,
            geometry,
            power_line,
        }
    }

    /// Display name, falling back to the identifier.
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.identifier)
    }

    /// Phase count inherited from the power-line template.
    pub fn phase_count(&self) -> u32 {
        self.power_line.phase_count()
    }

    /// Nominal voltage inherited from the power-line template, if set.
    pub fn nominal_voltage(&self) -> Option<Real> {
        self.power_line.nominal_voltage
    }
}

/// A thermal distribution pipe between two attachment points. Pipe and
/// soil parameters are inherited from the owning loop.
#[derive(Debug, Clone, PartialEq)]
pub struct ThermalConnector {
    pub identifier: String,
    pub display_name: Option<String>,
    pub geometry: RouteGeometry,
}

impl ThermalConnector {
    pub fn new(identifier: impl Into<String>, geometry: RouteGeometry) -> Self {
        Self {
            identifier: identifier.into(),
            display_name: None,
            geometry,
        }
    }

    /// Display name, falling back to the identifier.
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.identifier)
    }
}
