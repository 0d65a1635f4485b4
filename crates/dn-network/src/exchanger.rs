//! Ground heat exchangers: bore-field polygons in a thermal loop.

use dn_core::Real;
use dn_geometry::{Point2D, Polygon2D, Vector2D};

/// A field of boreholes supplying a thermal loop with capacity. The
/// polygon outlines the borehole area; drilling constants live on the
/// owning loop's borehole record.
#[derive(Debug, Clone, PartialEq)]
pub struct GroundHeatExchanger {
    pub identifier: String,
    pub display_name: Option<String>,
    pub geometry: Polygon2D,
}

impl GroundHeatExchanger {
    pub fn new(identifier: impl Into<String>, geometry: Polygon2D) -> Self {
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

    /// Bore-field footprint area in square meters.
    pub fn area(&self) -> Real {
        self.geometry.area()
    }

    pub fn translate(&mut self, vector: Vector2D) {
        self.geometry = self.geometry.translate(vector);
    }

    pub fn rotate(&mut self, angle: Real, origin: &Point2D) {
        self.geometry = self.geometry.rotate(angle, origin);
    }

    pub fn scale(&mut self, factor: Real, origin: &Point2D) {
        self.geometry = self.geometry.scale(factor, origin);
    }

    pub fn reflect(&mut self, origin: &Point2D, axis: Vector2D) {
        self.geometry = self.geometry.reflect(origin, axis);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_reports_field_size() {
        let ghe = GroundHeatExchanger::new(
            "field_1",
            Polygon2D::from_rectangle(Point2D::new(0.0, 0.0), 30.0, 20.0).unwrap(),
        );
        assert_eq!(ghe.area(), 600.0);
    }
}
