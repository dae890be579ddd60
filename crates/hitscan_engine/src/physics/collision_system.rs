//! Core collision pass
//!
//! One pass sweeps a bullet ray across every triangle of every target mesh.
//! There is no broad phase: target meshes are small, and the pass only runs
//! when the pointer is released, never per frame.
//!
//! Each pass replaces the debug group wholesale, so running it twice on an
//! unchanged scene gives the same report and the same shapes.

use crate::debug::CollisionDebugVisualizer;
use crate::foundation::math::{utils, Vec3};
use crate::physics::collision::{classify, Intersection, Ray, TriangleSource};

/// Decimal places shown for the bullet vector
pub const DISPLAY_PRECISION: i32 = 3;

/// Outcome of one collision pass
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CollisionReport {
    /// Finite-segment hits
    pub hit_count: usize,
    /// Crossing point of each finite-segment hit, in sweep order
    pub hit_points: Vec<Vec3>,
    /// Hits reported by the degenerate (parallel ray) branch
    pub degenerate_hits: usize,
    /// Triangles classified in this pass
    pub triangles_tested: usize,
    /// Scaled ray direction
    pub bullet_vector: Vec3,
}

impl CollisionReport {
    /// Bullet vector as `(x, y, z)` rounded for display
    pub fn vector_text(&self) -> String {
        format_vector(&self.bullet_vector)
    }

    /// Hit count for display
    pub fn count_text(&self) -> String {
        self.hit_count.to_string()
    }
}

/// Format a vector as `(x, y, z)` with three decimals at most
///
/// Halves round towards +infinity and negative zero prints as `0`.
pub fn format_vector(v: &Vec3) -> String {
    let component = |value: f64| {
        // Adding +0.0 folds -0.0 into 0.0
        let rounded = utils::round_to(value, DISPLAY_PRECISION) + 0.0;
        rounded.to_string()
    };
    format!("({}, {}, {})", component(v.x), component(v.y), component(v.z))
}

/// Run one collision pass of `ray` against `targets`
///
/// Targets that are `None` (not loaded yet) are skipped. The debug group is
/// cleared before the sweep starts.
pub fn run_collision<I, S>(ray: &Ray, targets: I, debug: &mut CollisionDebugVisualizer) -> CollisionReport
where
    I: IntoIterator<Item = Option<S>>,
    S: TriangleSource,
{
    debug.begin_pass();

    let mut report = CollisionReport {
        bullet_vector: ray.direction,
        ..CollisionReport::default()
    };

    for (slot, target) in targets.into_iter().enumerate() {
        let Some(mesh) = target else {
            log::debug!("Target slot {slot} not loaded, skipping");
            continue;
        };

        mesh.for_each_triangle(&mut |triangle| {
            let result = classify(ray, &triangle);
            debug.draw_triangle_result(&triangle, &result);
            report.triangles_tested += 1;

            match result {
                Intersection::Hit { point } => {
                    report.hit_count += 1;
                    report.hit_points.push(point);
                }
                Intersection::Degenerate => report.degenerate_hits += 1,
                Intersection::Miss => {}
            }
        });
    }

    log::debug!(
        "Collision pass from {} along {}: {} triangles tested",
        format_vector(&ray.origin),
        report.vector_text(),
        report.triangles_tested
    );
    log::info!(
        "Bullet {} hit {} triangle(s) ({} degenerate)",
        report.vector_text(),
        report.hit_count,
        report.degenerate_hits
    );

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::EulerRotation;
    use crate::physics::collision::{PlaneEquation, Triangle};
    use crate::physics::emitter::build_ray;
    use approx::assert_relative_eq;

    fn forward_ray() -> Ray {
        build_ray(Vec3::zeros(), EulerRotation::default(), 10.0)
    }

    fn front() -> Triangle {
        Triangle::new(
            Vec3::new(-1.0, 0.0, -5.0),
            Vec3::new(1.0, 0.0, -5.0),
            Vec3::new(0.0, 1.0, -5.0),
        )
    }

    fn behind() -> Triangle {
        Triangle::new(
            Vec3::new(-1.0, 0.0, 5.0),
            Vec3::new(1.0, 0.0, 5.0),
            Vec3::new(0.0, 1.0, 5.0),
        )
    }

    fn aside() -> Triangle {
        Triangle::new(
            Vec3::new(4.0, 0.0, -5.0),
            Vec3::new(6.0, 0.0, -5.0),
            Vec3::new(5.0, 1.0, -5.0),
        )
    }

    fn points(viz: &CollisionDebugVisualizer) -> usize {
        viz.pass_shapes().iter().filter(|s| s.kind() == "point").count()
    }

    #[test]
    fn test_single_triangle_hit() {
        let mut viz = CollisionDebugVisualizer::new();
        let report = run_collision(&forward_ray(), [Some(vec![front()])], &mut viz);

        assert_eq!(report.hit_count, 1);
        assert_relative_eq!(report.hit_points[0], Vec3::new(0.0, 0.0, -5.0), epsilon = 1e-12);
        assert_eq!(report.vector_text(), "(0, 0, -10)");
        assert_eq!(report.count_text(), "1");
    }

    #[test]
    fn test_triangle_behind_emitter_misses() {
        let mut viz = CollisionDebugVisualizer::new();
        let report = run_collision(&forward_ray(), [Some(vec![behind()])], &mut viz);

        assert_eq!(report.hit_count, 0);
        assert!(report.hit_points.is_empty());
        assert_eq!(report.count_text(), "0");
    }

    #[test]
    fn test_three_targets_one_hit() {
        let mut viz = CollisionDebugVisualizer::new();
        let targets = [Some(vec![aside()]), Some(vec![front()]), Some(vec![behind()])];
        let report = run_collision(&forward_ray(), targets, &mut viz);

        assert_eq!(report.hit_count, 1);
        assert_eq!(report.triangles_tested, 3);
        assert_eq!(points(&viz), 1);

        // Every tested triangle is outlined, only the hit one is filled
        let shapes = viz.pass_shapes();
        assert_eq!(shapes.iter().filter(|s| s.kind() == "line").count(), 9);
        assert_eq!(shapes.iter().filter(|s| s.kind() == "filled_triangle").count(), 1);
    }

    #[test]
    fn test_hit_point_lies_on_plane() {
        let mut viz = CollisionDebugVisualizer::new();
        let ray = build_ray(Vec3::new(0.0, 0.3, 1.0), EulerRotation::new(0.05, -0.03, 0.0), 10.0);
        let triangle = front();
        let report = run_collision(&ray, [Some(vec![triangle])], &mut viz);

        assert_eq!(report.hit_count, 1);
        let PlaneEquation { a, b, c, d } = triangle.plane();
        let p = report.hit_points[0];
        let scale = Vec3::new(a, b, c).norm();
        assert!((a * p.x + b * p.y + c * p.z + d).abs() / scale < 1e-9);
    }

    #[test]
    fn test_pass_is_idempotent_and_replaces_shapes() {
        let mut viz = CollisionDebugVisualizer::new();
        let targets = || [Some(vec![front(), aside()]), None, Some(vec![behind()])];

        let first = run_collision(&forward_ray(), targets(), &mut viz);
        let first_shapes = viz.pass_shapes().to_vec();
        let second = run_collision(&forward_ray(), targets(), &mut viz);

        assert_eq!(first, second);
        assert_eq!(viz.pass_shapes(), first_shapes.as_slice());
    }

    #[test]
    fn test_absent_targets_are_skipped() {
        let mut viz = CollisionDebugVisualizer::new();
        let report = run_collision::<_, Vec<Triangle>>(&forward_ray(), [None, None, None], &mut viz);

        assert_eq!(report, CollisionReport {
            bullet_vector: Vec3::new(0.0, 0.0, -10.0),
            ..CollisionReport::default()
        });
        assert!(viz.pass_shapes().is_empty());
    }

    #[test]
    fn test_new_pass_clears_old_markers() {
        let mut viz = CollisionDebugVisualizer::new();
        run_collision(&forward_ray(), [Some(vec![front()])], &mut viz);
        assert_eq!(points(&viz), 1);

        run_collision(&forward_ray(), [Some(vec![aside()])], &mut viz);
        assert_eq!(points(&viz), 0);
    }

    #[test]
    fn test_format_vector_rounding() {
        assert_eq!(format_vector(&Vec3::new(-0.0, 0.0625, -0.0625)), "(0, 0.063, -0.062)");
        assert_eq!(format_vector(&Vec3::new(1.5, -2.0, 10.0)), "(1.5, -2, 10)");
        assert_eq!(format_vector(&Vec3::new(-0.0001, 0.0, 0.0)), "(0, 0, 0)");
    }
}
