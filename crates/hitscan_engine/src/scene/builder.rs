//! Initial scene setup from configuration
//!
//! Inline and procedural targets are ready immediately. OBJ targets start as
//! [`NodeGeometry::Pending`] and are handed back as [`PendingLoad`]s for the
//! caller to complete once the file is read.

use std::path::PathBuf;

use super::registry::{NodeGeometry, SceneError, SceneNode, SceneRegistry, SceneRole};
use crate::core::config::{GridConfig, MeshSource, SceneConfig, TargetConfig};
use crate::foundation::math::{Transform, Vec3};
use crate::physics::collision::{shapes, Triangle};

/// Height of the bullet line above the emitter origin
pub const BULLET_LINE_HEIGHT: f64 = 0.1;

/// Half extents of the emitter's box
pub const EMITTER_HALF_EXTENTS: [f64; 3] = [0.1, 0.1, 0.3];

/// A target whose mesh still has to be loaded from disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLoad {
    /// Slot waiting for the mesh
    pub role: SceneRole,
    /// OBJ file to read
    pub path: PathBuf,
}

/// Build the registry for a scene config
pub fn build_scene(config: &SceneConfig, bullet_length: f64) -> Result<(SceneRegistry, Vec<PendingLoad>), SceneError> {
    let mut registry = SceneRegistry::new();
    let mut pending = Vec::new();

    registry.insert(
        SceneNode::new("grid", SceneRole::Grid, Transform::identity())
            .with_geometry(NodeGeometry::Lines(grid_lines(&config.grid))),
    )?;

    let emitter = Transform::from_position_rotation(config.emitter.position, config.emitter.rotation);
    registry.insert(
        SceneNode::new("gun", SceneRole::Emitter, emitter)
            .with_geometry(NodeGeometry::Mesh(shapes::cuboid(Vec3::from(EMITTER_HALF_EXTENTS)).triangles())),
    )?;

    registry.insert(
        SceneNode::new("bullet", SceneRole::BulletLine, Transform::identity()).with_geometry(NodeGeometry::Lines(vec![
            (
                Vec3::new(0.0, BULLET_LINE_HEIGHT, 0.0),
                Vec3::new(0.0, BULLET_LINE_HEIGHT, -bullet_length),
            ),
        ])),
    )?;

    for target in &config.targets {
        let geometry = match &target.source {
            MeshSource::Obj(path) => {
                pending.push(PendingLoad {
                    role: target.role,
                    path: path.clone(),
                });
                NodeGeometry::Pending
            }
            _ => NodeGeometry::Mesh(inline_triangles(target)),
        };
        registry.insert(SceneNode::new(target.role.as_str(), target.role, target.transform).with_geometry(geometry))?;
    }

    registry.insert(SceneNode::new("debug", SceneRole::DebugGroup, Transform::identity()))?;

    log::info!(
        "Scene built with {} nodes, {} mesh load(s) pending",
        registry.len(),
        pending.len()
    );
    Ok((registry, pending))
}

fn inline_triangles(target: &TargetConfig) -> Vec<Triangle> {
    match &target.source {
        MeshSource::Triangles(list) => list
            .iter()
            .map(|[a, b, c]| Triangle::new(Vec3::from(*a), Vec3::from(*b), Vec3::from(*c)))
            .collect(),
        MeshSource::Cuboid(half_extents) => shapes::cuboid(Vec3::from(*half_extents)).triangles(),
        MeshSource::Obj(_) => Vec::new(),
    }
}

/// Grid helper on the XZ plane, centred on the origin
pub fn grid_lines(grid: &GridConfig) -> Vec<(Vec3, Vec3)> {
    let half = grid.size * 0.5;
    let step = grid.size / f64::from(grid.divisions.max(1));
    (0..=grid.divisions)
        .flat_map(|i| {
            let offset = -half + step * f64::from(i);
            [
                (Vec3::new(offset, 0.0, -half), Vec3::new(offset, 0.0, half)),
                (Vec3::new(-half, 0.0, offset), Vec3::new(half, 0.0, offset)),
            ]
        })
        .collect()
}
