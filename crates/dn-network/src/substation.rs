//! The substation: the single root node of an electrical network.

use dn_core::Real;
use dn_geometry::{Point2D, Polygon2D, Vector2D};

/// The electrical substation supplying a network. Its footprint polygon
/// is the attachment target for feeder connectors.
#[derive(Debug, Clone, PartialEq)]
pub struct Substation {
    pub identifier: String,
    pub display_name: Option<String>,
    pub geometry: Polygon2D,
}

impl Substation {
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
    fn transforms_move_the_footprint() {
        let mut substation = Substation::new(
            "sub_1",
            Polygon2D::from_rectangle(Point2D::new(0.0, 0.0), 10.0, 10.0).unwrap(),
        );
        substation.translate(Vector2D::new(5.0, 0.0));
        assert_eq!(substation.geometry.vertices()[0], Point2D::new(5.0, 0.0));

        substation.scale(2.0, &Point2D::new(5.0, 0.0));
        assert_eq!(substation.geometry.area(), 400.0);
    }
}
