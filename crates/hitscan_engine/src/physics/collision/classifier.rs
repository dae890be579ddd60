//! Bullet ray versus triangle classification
//!
//! Decides, for one bounded bullet ray and one triangle, whether the bullet
//! passes through the triangle. The test runs in three stages:
//!
//! 1. Plane equation of the triangle by determinant expansion.
//! 2. Ray/plane parameter `t`, with the ray direction already scaled to the
//!    bullet length so the segment is `t` in [0, 1].
//! 3. Either the degenerate branch (ray parallel to the plane, denominator
//!    vanished) or the finite-segment branch (hit point inside the segment,
//!    followed by same-side edge tests).
//!
//! Numeric edge cases never raise: a zero denominator produces an infinite or
//! NaN `t`, which is routed explicitly.

use super::primitives::{Ray, Triangle};
use super::sign::vectors_agree;
use crate::foundation::math::Vec3;

/// Outcome of classifying one triangle against one bullet ray
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intersection {
    /// The bullet misses the triangle
    Miss,
    /// The bullet crosses the triangle inside its segment
    Hit {
        /// Exact world-space crossing point
        point: Vec3,
    },
    /// The ray runs parallel to the triangle's plane and the coplanar
    /// fallback flagged it; there is no single crossing point
    Degenerate,
}

impl Intersection {
    /// True for both [`Intersection::Hit`] and [`Intersection::Degenerate`]
    pub fn is_hit(&self) -> bool {
        !matches!(self, Self::Miss)
    }

    /// Crossing point for finite-segment hits
    pub fn point(&self) -> Option<Vec3> {
        match self {
            Self::Hit { point } => Some(*point),
            _ => None,
        }
    }
}

/// Classify `triangle` against the bounded bullet `ray`
pub fn classify(ray: &Ray, triangle: &Triangle) -> Intersection {
    let plane = triangle.plane();
    let denominator = plane.dot(&ray.direction);
    let t = -(plane.evaluate(&ray.origin) / denominator);

    if denominator == 0.0 && (t == 0.0 || t.is_infinite()) {
        return classify_degenerate(ray, triangle);
    }

    if t.is_finite() && (0.0..=1.0).contains(&t) {
        let point = ray.point_at(t);
        if point_in_triangle(triangle, &point) {
            return Intersection::Hit { point };
        }
    }

    Intersection::Miss
}

/// Same-side test of `point` against the three edges
///
/// Only the AB/BC and BC/CA pairs are compared. The CA/AB pair follows from
/// the other two except when one edge vector is exactly zero, in which case
/// the point lies on that edge's line and the remaining pair decides.
fn point_in_triangle(triangle: &Triangle, point: &Vec3) -> bool {
    let Triangle { a, b, c } = *triangle;

    let ab = (b - a).cross(&(point - a));
    let bc = (c - b).cross(&(point - b));
    let ca = (a - c).cross(&(point - c));

    vectors_agree(&ab, &bc) && vectors_agree(&bc, &ca)
}

/// Fallback for rays parallel to the triangle's plane
///
/// Builds the three origin-relative corner cross products and flags the
/// triangle when any consecutive pair disagrees. This is an approximation,
/// not a coplanar containment test.
fn classify_degenerate(ray: &Ray, triangle: &Triangle) -> Intersection {
    let origin = ray.origin;
    let [oa, ob, oc] = triangle.vertices().map(|v| v - origin);

    let first = oa.cross(&ob);
    let second = ob.cross(&oc);
    let third = oc.cross(&oa);

    let agree = vectors_agree(&first, &second)
        && vectors_agree(&second, &third)
        && vectors_agree(&third, &first);

    if agree {
        Intersection::Miss
    } else {
        Intersection::Degenerate
    }
}
