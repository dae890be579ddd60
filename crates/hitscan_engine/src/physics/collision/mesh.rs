//! Collision mesh representations
//!
//! Meshes keep their triangles in model space and hand out world-space
//! triangles on demand through [`TriangleSource`].

use super::primitives::{Ray, Triangle};
use crate::foundation::math::{Transform, Vec3};

/// Anything that can enumerate world-space triangles
///
/// Enumeration is finite, restartable, and yields triangles in the mesh's
/// own emission order. A mesh without triangles visits nothing.
pub trait TriangleSource {
    /// Call `visit` once per world-space triangle
    fn for_each_triangle(&self, visit: &mut dyn FnMut(Triangle));

    /// Number of triangles `for_each_triangle` will visit
    fn triangle_count(&self) -> usize {
        let mut count = 0;
        self.for_each_triangle(&mut |_| count += 1);
        count
    }
}

impl TriangleSource for [Triangle] {
    fn for_each_triangle(&self, visit: &mut dyn FnMut(Triangle)) {
        self.iter().copied().for_each(visit);
    }

    fn triangle_count(&self) -> usize {
        self.len()
    }
}

impl TriangleSource for Vec<Triangle> {
    fn for_each_triangle(&self, visit: &mut dyn FnMut(Triangle)) {
        self.as_slice().for_each_triangle(visit);
    }

    fn triangle_count(&self) -> usize {
        self.len()
    }
}

/// Indexed triangle data as produced by loaders
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    /// Vertex positions
    pub positions: Vec<Vec3>,
    /// Three indices per triangle
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Build triangles from the index list (model space)
    ///
    /// Trailing indices that do not form a full triangle and triangles with
    /// out-of-range indices are skipped.
    pub fn triangles(&self) -> Vec<Triangle> {
        self.indices
            .chunks_exact(3)
            .filter_map(|chunk| {
                let v = |i: u32| self.positions.get(i as usize).copied();
                Some(Triangle::new(v(chunk[0])?, v(chunk[1])?, v(chunk[2])?))
            })
            .collect()
    }
}

/// Model-space triangles placed in the world by a transform
///
/// A borrowed view: the triangles stay in model space and are transformed
/// only while being enumerated.
#[derive(Debug, Clone, Copy)]
pub struct PlacedMesh<'a> {
    local_triangles: &'a [Triangle],
    transform: &'a Transform,
}

impl<'a> PlacedMesh<'a> {
    /// Place model-space triangles with a transform
    pub fn new(local_triangles: &'a [Triangle], transform: &'a Transform) -> Self {
        Self {
            local_triangles,
            transform,
        }
    }

    /// Transform one model-space triangle into world space
    pub fn to_world(&self, triangle: &Triangle) -> Triangle {
        let [a, b, c] = triangle.vertices().map(|v| self.transform.transform_point(v));
        Triangle::new(a, b, c)
    }

    /// Closest pick distance along an unbounded ray, if any triangle is hit
    pub fn pick(&self, ray: &Ray) -> Option<f64> {
        let mut closest: Option<f64> = None;
        self.for_each_triangle(&mut |triangle| {
            if let Some(t) = triangle.pick(ray) {
                if closest.map_or(true, |best| t < best) {
                    closest = Some(t);
                }
            }
        });
        closest
    }
}

impl TriangleSource for PlacedMesh<'_> {
    fn for_each_triangle(&self, visit: &mut dyn FnMut(Triangle)) {
        for triangle in self.local_triangles {
            visit(self.to_world(triangle));
        }
    }

    fn triangle_count(&self) -> usize {
        self.local_triangles.len()
    }
}

/// Common procedural shapes, in model space
pub mod shapes {
    use super::{MeshData, Vec3};

    /// Single triangle
    pub fn triangle(a: Vec3, b: Vec3, c: Vec3) -> MeshData {
        MeshData {
            positions: vec![a, b, c],
            indices: vec![0, 1, 2],
        }
    }

    /// Axis-aligned box centred on the origin, outward-facing (CCW) triangles
    pub fn cuboid(half_extents: Vec3) -> MeshData {
        let (x, y, z) = (half_extents.x, half_extents.y, half_extents.z);
        let positions = vec![
            Vec3::new(-x, -y, -z),
            Vec3::new(x, -y, -z),
            Vec3::new(x, y, -z),
            Vec3::new(-x, y, -z),
            Vec3::new(-x, -y, z),
            Vec3::new(x, -y, z),
            Vec3::new(x, y, z),
            Vec3::new(-x, y, z),
        ];
        #[rustfmt::skip]
        let indices = vec![
            4, 5, 6, 4, 6, 7, // +z
            1, 0, 3, 1, 3, 2, // -z
            5, 1, 2, 5, 2, 6, // +x
            0, 4, 7, 0, 7, 3, // -x
            7, 6, 2, 7, 2, 3, // +y
            0, 1, 5, 0, 5, 4, // -y
        ];
        MeshData { positions, indices }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::EulerRotation;

    #[test]
    fn test_mesh_data_skips_partial_and_invalid_triangles() {
        let data = MeshData {
            positions: vec![Vec3::zeros(), Vec3::x(), Vec3::y()],
            indices: vec![0, 1, 2, 0, 1, 9, 2, 1],
        };
        assert_eq!(data.triangles().len(), 1);
    }

    #[test]
    fn test_world_space_enumeration_preserves_order() {
        let triangles = shapes::triangle(Vec3::zeros(), Vec3::x(), Vec3::y()).triangles();
        let transform = Transform::from_position(Vec3::new(0.0, 0.0, -5.0));
        let mesh = PlacedMesh::new(&triangles, &transform);

        let mut seen = Vec::new();
        mesh.for_each_triangle(&mut |t| seen.push(t));
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].a, Vec3::new(0.0, 0.0, -5.0));
        assert_eq!(seen[0].b, Vec3::new(1.0, 0.0, -5.0));
        assert_eq!(seen[0].c, Vec3::new(0.0, 1.0, -5.0));

        // Restartable: a second pass yields the same triangles
        let mut again = Vec::new();
        mesh.for_each_triangle(&mut |t| again.push(t));
        assert_eq!(seen, again);
    }

    #[test]
    fn test_empty_mesh_visits_nothing() {
        let transform = Transform::identity();
        let mesh = PlacedMesh::new(&[], &transform);
        let mut visits = 0;
        mesh.for_each_triangle(&mut |_| visits += 1);
        assert_eq!(visits, 0);
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn test_cuboid_faces_point_outward() {
        let data = shapes::cuboid(Vec3::new(1.0, 2.0, 3.0));
        let triangles = data.triangles();
        assert_eq!(triangles.len(), 12);
        for tri in &triangles {
            let normal = tri.plane().normal();
            assert!(normal.dot(&tri.centroid()) > 0.0, "inward face {tri:?}");
        }
    }

    #[test]
    fn test_pick_returns_nearest_face() {
        let triangles = shapes::cuboid(Vec3::new(0.5, 0.5, 0.5)).triangles();
        let rotation = EulerRotation::new(0.0, 0.3, 0.0);
        let transform = Transform::from_position_rotation(Vec3::new(0.0, 0.0, -4.0), rotation);
        let mesh = PlacedMesh::new(&triangles, &transform);
        let ray = Ray::new(Vec3::new(0.1, 0.1, 0.0), Vec3::new(0.0, 0.0, -1.0));
        // Yawed box: the near face is closer than the centre but not flat-on
        let t = mesh.pick(&ray).unwrap_or(f64::NAN);
        assert!(t > 3.0 && t < 4.0, "t = {t}");
    }
}
