//! Directed line segments.

use dn_core::Real;

use crate::error::{GeometryError, GeometryResult};
use crate::point::{Point2D, Vector2D};

/// A directed line segment stored as origin `p` plus displacement `v`.
///
/// The endpoints are `p` and `p + v`. Zero-length segments are rejected
/// at construction: every downstream query (distance, clustering,
/// intersection) assumes a nonzero direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment2D {
    p: Point2D,
    v: Vector2D,
}

impl LineSegment2D {
    pub fn new(p: Point2D, v: Vector2D) -> GeometryResult<Self> {
        if v.magnitude() == 0.0 {
            return Err(GeometryError::Degenerate {
                what: "zero-length line segment",
            });
        }
        Ok(Self { p, v })
    }

    /// Build a segment from two endpoints.
    pub fn from_end_points(p1: Point2D, p2: Point2D) -> GeometryResult<Self> {
        Self::new(p1, p1.vector_to(&p2))
    }

    pub fn p(&self) -> Point2D {
        self.p
    }

    pub fn v(&self) -> Vector2D {
        self.v
    }

    /// Start point.
    pub fn p1(&self) -> Point2D {
        self.p
    }

    /// End point (`p + v`).
    pub fn p2(&self) -> Point2D {
        self.p.translate(self.v)
    }

    pub fn length(&self) -> Real {
        self.v.magnitude()
    }

    pub fn midpoint(&self) -> Point2D {
        self.p.translate(self.v.scale(0.5))
    }

    /// Shortest distance from `point` to this segment.
    pub fn distance_to_point(&self, point: &Point2D) -> Real {
        let w = self.p.vector_to(point);
        let t = (w.dot(self.v) / self.v.dot(self.v)).clamp(0.0, 1.0);
        let closest = self.p.translate(self.v.scale(t));
        closest.distance_to(point)
    }

    /// Whether `point` lies on this segment within `tolerance`.
    pub fn is_point_on_segment(&self, point: &Point2D, tolerance: Real) -> bool {
        self.distance_to_point(point) <= tolerance
    }

    /// Shortest distance between two segments (0 when they cross).
    pub fn distance_to_segment(&self, other: &LineSegment2D) -> Real {
        if self.properly_intersects(other) {
            return 0.0;
        }
        let d1 = self.distance_to_point(&other.p1());
        let d2 = self.distance_to_point(&other.p2());
        let d3 = other.distance_to_point(&self.p1());
        let d4 = other.distance_to_point(&self.p2());
        d1.min(d2).min(d3).min(d4)
    }

    /// Whether the segments cross or come within `tolerance` of touching.
    pub fn intersects(&self, other: &LineSegment2D, tolerance: Real) -> bool {
        self.distance_to_segment(other) <= tolerance
    }

    /// Strict interior crossing test via orientation signs. Collinear and
    /// endpoint-touching cases report false here; `distance_to_segment`
    /// resolves them through point distances instead.
    fn properly_intersects(&self, other: &LineSegment2D) -> bool {
        let d1 = self.v.cross(self.p.vector_to(&other.p1()));
        let d2 = self.v.cross(self.p.vector_to(&other.p2()));
        let d3 = other.v.cross(other.p.vector_to(&self.p1()));
        let d4 = other.v.cross(other.p.vector_to(&self.p2()));
        ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
            && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    }

    pub fn translate(&self, vector: Vector2D) -> LineSegment2D {
        LineSegment2D {
            p: self.p.translate(vector),
            v: self.v,
        }
    }

    pub fn rotate(&self, angle: Real, origin: &Point2D) -> LineSegment2D {
        LineSegment2D {
            p: self.p.rotate(angle, origin),
            v: self.v.rotate(angle),
        }
    }

    pub fn scale(&self, factor: Real, origin: &Point2D) -> LineSegment2D {
        LineSegment2D {
            p: self.p.scale(factor, origin),
            v: self.v.scale(factor),
        }
    }

    pub fn reflect(&self, origin: &Point2D, axis: Vector2D) -> LineSegment2D {
        let p1 = self.p1().reflect(origin, axis);
        let p2 = self.p2().reflect(origin, axis);
        LineSegment2D {
            p: p1,
            v: p1.vector_to(&p2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> LineSegment2D {
        LineSegment2D::from_end_points(Point2D::new(x1, y1), Point2D::new(x2, y2)).unwrap()
    }

    #[test]
    fn zero_length_is_degenerate() {
        let err = LineSegment2D::new(Point2D::new(1.0, 1.0), Vector2D::new(0.0, 0.0));
        assert!(matches!(
            err,
            Err(GeometryError::Degenerate { .. })
        ));
    }

    #[test]
    fn end_points_and_length() {
        let s = seg(0.0, 0.0, 3.0, 4.0);
        assert_eq!(s.p1(), Point2D::new(0.0, 0.0));
        assert_eq!(s.p2(), Point2D::new(3.0, 4.0));
        assert_eq!(s.length(), 5.0);
        assert_eq!(s.midpoint(), Point2D::new(1.5, 2.0));
    }

    #[test]
    fn point_on_segment_within_tolerance() {
        let s = seg(0.0, 0.0, 10.0, 0.0);
        assert!(s.is_point_on_segment(&Point2D::new(5.0, 0.0), 0.0));
        assert!(s.is_point_on_segment(&Point2D::new(5.0, 0.005), 0.01));
        assert!(!s.is_point_on_segment(&Point2D::new(5.0, 0.05), 0.01));
        // Beyond the endpoint the distance is measured to the endpoint
        assert!(!s.is_point_on_segment(&Point2D::new(10.5, 0.0), 0.01));
    }

    #[test]
    fn crossing_segments_have_zero_distance() {
        let a = seg(0.0, -1.0, 0.0, 1.0);
        let b = seg(-1.0, 0.0, 1.0, 0.0);
        assert_eq!(a.distance_to_segment(&b), 0.0);
        assert!(a.intersects(&b, 0.0));
    }

    #[test]
    fn parallel_segments_distance() {
        let a = seg(0.0, 0.0, 10.0, 0.0);
        let b = seg(0.0, 2.0, 10.0, 2.0);
        assert!((a.distance_to_segment(&b) - 2.0).abs() < 1e-12);
        assert!(!a.intersects(&b, 1.0));
        assert!(a.intersects(&b, 2.0));
    }

    #[test]
    fn collinear_overlapping_segments_touch() {
        let a = seg(0.0, 0.0, 10.0, 0.0);
        let b = seg(5.0, 0.0, 15.0, 0.0);
        assert_eq!(a.distance_to_segment(&b), 0.0);
    }

    #[test]
    fn rotate_preserves_length() {
        let s = seg(1.0, 0.0, 4.0, 0.0);
        let r = s.rotate(1.1, &Point2D::new(0.0, 0.0));
        assert!((r.length() - 3.0).abs() < 1e-12);
    }
}
