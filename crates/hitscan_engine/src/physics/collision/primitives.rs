//! Primitive collision shapes
//!
//! Rays, triangles and plane equations shared by the bullet classifier and
//! the pointer picking path.

use crate::foundation::math::Vec3;

/// A ray for bullets and picking
///
/// The direction is NOT normalized. Bullet rays carry their full length in
/// the direction so that `t` in [0, 1] spans the whole segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// The origin point of the ray in world space
    pub origin: Vec3,
    /// The direction of the ray, scaled to the segment length
    pub direction: Vec3,
}

impl Ray {
    /// Creates a new ray with the given origin and direction (kept as-is)
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Get a point along the ray at parameter t
    pub fn point_at(&self, t: f64) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Plane `a*x + b*y + c*z + d = 0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneEquation {
    /// X coefficient
    pub a: f64,
    /// Y coefficient
    pub b: f64,
    /// Z coefficient
    pub c: f64,
    /// Constant term
    pub d: f64,
}

impl PlaneEquation {
    /// Unnormalized normal `(a, b, c)`
    pub fn normal(&self) -> Vec3 {
        Vec3::new(self.a, self.b, self.c)
    }

    /// `a*x + b*y + c*z`, summed left to right
    pub fn dot(&self, v: &Vec3) -> f64 {
        self.a * v.x + self.b * v.y + self.c * v.z
    }

    /// Signed (unnormalized) distance of a point to the plane
    pub fn evaluate(&self, p: &Vec3) -> f64 {
        self.dot(p) + self.d
    }
}

/// A world-space triangle; vertex order decides the plane orientation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// First vertex
    pub a: Vec3,
    /// Second vertex
    pub b: Vec3,
    /// Third vertex
    pub c: Vec3,
}

impl Triangle {
    /// Creates a new triangle
    pub fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self { a, b, c }
    }

    /// Vertices in emission order
    pub fn vertices(&self) -> [Vec3; 3] {
        [self.a, self.b, self.c]
    }

    /// Plane through the three vertices by determinant expansion
    ///
    /// Written out term by term rather than as an edge cross product; the
    /// classifier's exact-zero checks depend on this summation order.
    pub fn plane(&self) -> PlaneEquation {
        let (x1, y1, z1) = (self.a.x, self.a.y, self.a.z);
        let (x2, y2, z2) = (self.b.x, self.b.y, self.b.z);
        let (x3, y3, z3) = (self.c.x, self.c.y, self.c.z);

        PlaneEquation {
            a: y1 * (z2 - z3) + y2 * (z3 - z1) + y3 * (z1 - z2),
            b: z1 * (x2 - x3) + z2 * (x3 - x1) + z3 * (x1 - x2),
            c: x1 * (y2 - y3) + x2 * (y3 - y1) + x3 * (y1 - y2),
            d: -(x1 * (y2 * z3 - y3 * z2) + x2 * (y3 * z1 - y1 * z3) + x3 * (y1 * z2 - y2 * z1)),
        }
    }

    /// Calculates the centroid (center point) of the triangle
    pub fn centroid(&self) -> Vec3 {
        (self.a + self.b + self.c) / 3.0
    }

    /// Möller-Trumbore ray-triangle intersection algorithm
    ///
    /// Used for pointer picking only, where the ray is unbounded. Returns the
    /// ray parameter of the hit. Bullets go through
    /// [`classify`](super::classifier::classify) instead.
    pub fn pick(&self, ray: &Ray) -> Option<f64> {
        const EPSILON: f64 = 1e-12;

        let edge1 = self.b - self.a;
        let edge2 = self.c - self.a;

        let h = ray.direction.cross(&edge2);
        let det = edge1.dot(&h);

        // Ray parallel to triangle?
        if det.abs() < EPSILON {
            return None;
        }

        let f = 1.0 / det;
        let s = ray.origin - self.a;
        let u = f * s.dot(&h);
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(&edge1);
        let v = f * ray.direction.dot(&q);
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = f * edge2.dot(&q);
        (t >= 0.0).then_some(t)
    }
}
