//! Open vertex chains used for connector routes.

use dn_core::Real;

use crate::error::{GeometryError, GeometryResult};
use crate::point::{Point2D, Vector2D};
use crate::segment::LineSegment2D;

/// An ordered open chain of 2 or more vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline2D {
    vertices: Vec<Point2D>,
}

impl Polyline2D {
    pub fn new(vertices: Vec<Point2D>) -> GeometryResult<Self> {
        if vertices.len() < 2 {
            return Err(GeometryError::Degenerate {
                what: "polyline with fewer than 2 vertices",
            });
        }
        if !vertices.iter().skip(1).any(|pt| *pt != vertices[0]) {
            return Err(GeometryError::Degenerate {
                what: "polyline with all coincident vertices",
            });
        }
        Ok(Self { vertices })
    }

    pub fn vertices(&self) -> &[Point2D] {
        &self.vertices
    }

    pub fn first(&self) -> Point2D {
        self.vertices[0]
    }

    pub fn last(&self) -> Point2D {
        *self.vertices.last().expect("polyline has >= 2 vertices")
    }

    pub fn length(&self) -> Real {
        self.vertices
            .windows(2)
            .map(|w| w[0].distance_to(&w[1]))
            .sum()
    }

    /// The chain as segments. Consecutive duplicate vertices produce no
    /// segment (a zero-length piece carries no route information).
    pub fn segments(&self) -> Vec<LineSegment2D> {
        self.vertices
            .windows(2)
            .filter_map(|w| LineSegment2D::from_end_points(w[0], w[1]).ok())
            .collect()
    }

    /// Shortest distance from `point` to any segment of the chain.
    pub fn distance_to_point(&self, point: &Point2D) -> Real {
        self.segments()
            .iter()
            .map(|s| s.distance_to_point(point))
            .fold(Real::INFINITY, Real::min)
    }

    /// Reversed copy (route direction flipped).
    pub fn reversed(&self) -> Polyline2D {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        Polyline2D { vertices }
    }

    pub fn translate(&self, vector: Vector2D) -> Polyline2D {
        Polyline2D {
            vertices: self.vertices.iter().map(|p| p.translate(vector)).collect(),
        }
    }

    pub fn rotate(&self, angle: Real, origin: &Point2D) -> Polyline2D {
        Polyline2D {
            vertices: self
                .vertices
                .iter()
                .map(|p| p.rotate(angle, origin))
                .collect(),
        }
    }

    pub fn scale(&self, factor: Real, origin: &Point2D) -> Polyline2D {
        Polyline2D {
            vertices: self
                .vertices
                .iter()
                .map(|p| p.scale(factor, origin))
                .collect(),
        }
    }

    pub fn reflect(&self, origin: &Point2D, axis: Vector2D) -> Polyline2D {
        Polyline2D {
            vertices: self
                .vertices
                .iter()
                .map(|p| p.reflect(origin, axis))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point2D> {
        coords.iter().map(|&(x, y)| Point2D::new(x, y)).collect()
    }

    #[test]
    fn too_few_vertices_is_degenerate() {
        assert!(Polyline2D::new(pts(&[(0.0, 0.0)])).is_err());
        assert!(Polyline2D::new(pts(&[(0.0, 0.0), (0.0, 0.0)])).is_err());
    }

    #[test]
    fn length_sums_segments() {
        let pl = Polyline2D::new(pts(&[(0.0, 0.0), (3.0, 0.0), (3.0, 4.0)])).unwrap();
        assert_eq!(pl.length(), 7.0);
        assert_eq!(pl.first(), Point2D::new(0.0, 0.0));
        assert_eq!(pl.last(), Point2D::new(3.0, 4.0));
        assert_eq!(pl.segments().len(), 2);
    }

    #[test]
    fn reversed_swaps_ends() {
        let pl = Polyline2D::new(pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 1.0)])).unwrap();
        let rev = pl.reversed();
        assert_eq!(rev.first(), pl.last());
        assert_eq!(rev.last(), pl.first());
        assert_eq!(rev.length(), pl.length());
    }

    #[test]
    fn distance_to_point_uses_nearest_segment() {
        let pl = Polyline2D::new(pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)])).unwrap();
        assert!((pl.distance_to_point(&Point2D::new(5.0, 1.0)) - 1.0).abs() < 1e-12);
        assert!((pl.distance_to_point(&Point2D::new(11.0, 5.0)) - 1.0).abs() < 1e-12);
    }
}
