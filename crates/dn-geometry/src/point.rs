//! Point and vector value types.

use dn_core::Real;

/// A point in 2D space.
///
/// Equality between positions is tolerance-based via
/// [`Point2D::is_equivalent`]; the derived `PartialEq` is exact and only
/// meant for structural comparisons (round-trip tests, dedup of inputs).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2D {
    pub x: Real,
    pub y: Real,
}

impl Point2D {
    pub fn new(x: Real, y: Real) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point2D) -> Real {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Whether two points coincide within `tolerance`.
    pub fn is_equivalent(&self, other: &Point2D, tolerance: Real) -> bool {
        self.distance_to(other) <= tolerance
    }

    /// Displacement from this point to `other`.
    pub fn vector_to(&self, other: &Point2D) -> Vector2D {
        Vector2D::new(other.x - self.x, other.y - self.y)
    }

    pub fn translate(&self, vector: Vector2D) -> Point2D {
        Point2D::new(self.x + vector.x, self.y + vector.y)
    }

    /// Rotate counterclockwise by `angle` radians around `origin`.
    pub fn rotate(&self, angle: Real, origin: &Point2D) -> Point2D {
        let (sin, cos) = angle.sin_cos();
        let dx = self.x - origin.x;
        let dy = self.y - origin.y;
        Point2D::new(
            origin.x + dx * cos - dy * sin,
            origin.y + dx * sin + dy * cos,
        )
    }

    /// Scale by `factor` away from `origin`.
    pub fn scale(&self, factor: Real, origin: &Point2D) -> Point2D {
        Point2D::new(
            origin.x + (self.x - origin.x) * factor,
            origin.y + (self.y - origin.y) * factor,
        )
    }

    /// Reflect across the infinite line through `origin` with direction `axis`.
    pub fn reflect(&self, origin: &Point2D, axis: Vector2D) -> Point2D {
        let d = axis.normalize();
        let v = origin.vector_to(self);
        let along = d.scale(2.0 * v.dot(d));
        Point2D::new(
            origin.x + along.x - v.x,
            origin.y + along.y - v.y,
        )
    }
}

/// A displacement in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2D {
    pub x: Real,
    pub y: Real,
}

impl Vector2D {
    pub fn new(x: Real, y: Real) -> Self {
        Self { x, y }
    }

    pub fn magnitude(&self) -> Real {
        self.x.hypot(self.y)
    }

    pub fn dot(&self, other: Vector2D) -> Real {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product; positive when `other` lies
    /// counterclockwise of this vector.
    pub fn cross(&self, other: Vector2D) -> Real {
        self.x * other.y - self.y * other.x
    }

    pub fn scale(&self, factor: Real) -> Vector2D {
        Vector2D::new(self.x * factor, self.y * factor)
    }

    /// Unit-length copy. The zero vector is returned unchanged; callers
    /// constructing geometry reject zero-length displacements first.
    pub fn normalize(&self) -> Vector2D {
        let mag = self.magnitude();
        if mag > 0.0 {
            self.scale(1.0 / mag)
        } else {
            *self
        }
    }

    pub fn rotate(&self, angle: Real) -> Vector2D {
        let (sin, cos) = angle.sin_cos();
        Vector2D::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }
}
