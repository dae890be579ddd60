//! Zero-tolerant sign agreement
//!
//! All inside/outside tests in the classifier go through these two predicates.
//! Zero agrees with everything, so points on an edge or vertex count as inside.

use crate::foundation::math::Vec3;

/// True when `a` and `b` do not have strictly opposite signs
///
/// Negative zero is folded to zero first. NaN never agrees with a non-zero value.
pub fn signs_agree(a: f64, b: f64) -> bool {
    let a = if a == 0.0 { 0.0 } else { a };
    let b = if b == 0.0 { 0.0 } else { b };
    a == b || a * b > 0.0 || a == 0.0 || b == 0.0
}

/// Component-wise [`signs_agree`] over two vectors
pub fn vectors_agree(u: &Vec3, v: &Vec3) -> bool {
    signs_agree(u.x, v.x) && signs_agree(u.y, v.y) && signs_agree(u.z, v.z)
}
