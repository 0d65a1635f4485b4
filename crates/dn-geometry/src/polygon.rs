//! Closed polygons used for terminal footprints and bore fields.

use dn_core::Real;

use crate::error::{GeometryError, GeometryResult};
use crate::point::{Point2D, Vector2D};
use crate::segment::LineSegment2D;

/// An implicitly closed polygon of 3 or more distinct vertices.
///
/// Vertex order is not semantically directional, but it is preserved so
/// winding queries (`is_clockwise`) stay consistent for downstream
/// flow-orientation checks.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon2D {
    vertices: Vec<Point2D>,
}

impl Polygon2D {
    pub fn new(vertices: Vec<Point2D>) -> GeometryResult<Self> {
        if vertices.len() < 3 {
            return Err(GeometryError::Degenerate {
                what: "polygon with fewer than 3 vertices",
            });
        }
        let mut distinct: Vec<Point2D> = Vec::new();
        for pt in &vertices {
            if !distinct.contains(pt) {
                distinct.push(*pt);
            }
        }
        if distinct.len() < 3 {
            return Err(GeometryError::Degenerate {
                what: "polygon with fewer than 3 distinct vertices",
            });
        }
        Ok(Self { vertices })
    }

    /// Axis-aligned rectangle helper, vertices counterclockwise from `min`.
    pub fn from_rectangle(min: Point2D, width: Real, height: Real) -> GeometryResult<Self> {
        Self::new(vec![
            min,
            Point2D::new(min.x + width, min.y),
            Point2D::new(min.x + width, min.y + height),
            Point2D::new(min.x, min.y + height),
        ])
    }

    pub fn vertices(&self) -> &[Point2D] {
        &self.vertices
    }

    /// Edges of the closed ring, including the closing edge back to the
    /// first vertex. Coincident consecutive vertices yield no edge.
    pub fn segments(&self) -> Vec<LineSegment2D> {
        let n = self.vertices.len();
        (0..n)
            .filter_map(|i| {
                LineSegment2D::from_end_points(self.vertices[i], self.vertices[(i + 1) % n]).ok()
            })
            .collect()
    }

    /// Signed shoelace area: positive for counterclockwise winding.
    pub fn signed_area(&self) -> Real {
        let n = self.vertices.len();
        let mut sum = 0.0;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            sum += a.x * b.y - b.x * a.y;
        }
        sum / 2.0
    }

    pub fn area(&self) -> Real {
        self.signed_area().abs()
    }

    pub fn perimeter(&self) -> Real {
        self.segments().iter().map(|s| s.length()).sum()
    }

    pub fn is_clockwise(&self) -> bool {
        self.signed_area() < 0.0
    }

    /// Area centroid of the ring.
    pub fn centroid(&self) -> Point2D {
        let n = self.vertices.len();
        let signed = self.signed_area();
        if signed == 0.0 {
            // Collinear ring: fall back to the vertex mean
            let (sx, sy) = self
                .vertices
                .iter()
                .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
            return Point2D::new(sx / n as Real, sy / n as Real);
        }
        let mut cx = 0.0;
        let mut cy = 0.0;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            let w = a.x * b.y - b.x * a.y;
            cx += (a.x + b.x) * w;
            cy += (a.y + b.y) * w;
        }
        Point2D::new(cx / (6.0 * signed), cy / (6.0 * signed))
    }

    /// Even-odd ray-casting containment test. Points on the boundary are
    /// not reliably classified here; use [`Polygon2D::is_point_on_edge`]
    /// with a tolerance for boundary queries.
    pub fn contains_point(&self, point: &Point2D) -> bool {
        let n = self.vertices.len();
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[j];
            if (a.y > point.y) != (b.y > point.y) {
                let x_cross = (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x;
                if point.x < x_cross {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    /// Shortest distance from `point` to the polygon boundary.
    pub fn distance_to_edge(&self, point: &Point2D) -> Real {
        self.segments()
            .iter()
            .map(|s| s.distance_to_point(point))
            .fold(Real::INFINITY, Real::min)
    }

    /// Whether `point` lies on the polygon boundary within `tolerance`.
    pub fn is_point_on_edge(&self, point: &Point2D, tolerance: Real) -> bool {
        self.distance_to_edge(point) <= tolerance
    }

    /// Whether two polygons intersect, touch within `tolerance`, or nest.
    ///
    /// The boundary-distance form also catches identical and
    /// collinear-edge rings that pure crossing tests miss, so two
    /// coincident bore fields at distance 0 report as overlapping even
    /// with a zero tolerance.
    pub fn overlaps(&self, other: &Polygon2D, tolerance: Real) -> bool {
        for a in self.segments() {
            for b in other.segments() {
                if a.distance_to_segment(&b) <= tolerance {
                    return true;
                }
            }
        }
        self.contains_point(&other.vertices[0]) || other.contains_point(&self.vertices[0])
    }

    pub fn translate(&self, vector: Vector2D) -> Polygon2D {
        Polygon2D {
            vertices: self.vertices.iter().map(|p| p.translate(vector)).collect(),
        }
    }

    pub fn rotate(&self, angle: Real, origin: &Point2D) -> Polygon2D {
        Polygon2D {
            vertices: self
                .vertices
                .iter()
                .map(|p| p.rotate(angle, origin))
                .collect(),
        }
    }

    pub fn scale(&self, factor: Real, origin: &Point2D) -> Polygon2D {
        Polygon2D {
            vertices: self
                .vertices
                .iter()
                .map(|p| p.scale(factor, origin))
                .collect(),
        }
    }

    pub fn reflect(&self, origin: &Point2D, axis: Vector2D) -> Polygon2D {
        Polygon2D {
            vertices: self
                .vertices
                .iter()
                .map(|p| p.reflect(origin, axis))
                .collect(),
        }
    }
}
