//! Scene node registry
//!
//! Nodes live in a [`SlotMap`] keyed by [`NodeKey`]. Every node also carries
//! a [`SceneRole`], and the registry keeps a role to key index so the
//! collision pass and the input handlers can look nodes up by what they are
//! rather than by name.

use serde::{Deserialize, Serialize};
use slotmap::SlotMap;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

use crate::foundation::math::{Transform, Vec3};
use crate::physics::collision::{PlacedMesh, Ray, Triangle};
use crate::physics::emitter::EmitterPose;

slotmap::new_key_type! {
    /// Handle to a node in a [`SceneRegistry`]
    pub struct NodeKey;
}

/// What a node is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneRole {
    /// Ground grid helper
    Grid,
    /// The object that fires the bullet
    Emitter,
    /// First target mesh
    TargetA,
    /// Second target mesh
    TargetB,
    /// Third target mesh
    TargetC,
    /// Visual bullet segment, parented to the emitter
    BulletLine,
    /// Container for debug shapes
    DebugGroup,
}

impl SceneRole {
    /// Target slots, in collision order
    pub const TARGETS: [SceneRole; 3] = [SceneRole::TargetA, SceneRole::TargetB, SceneRole::TargetC];

    /// Whether this role is a collision target slot
    pub fn is_target(self) -> bool {
        Self::TARGETS.contains(&self)
    }

    /// Whether the transform gizmo may attach to this role
    pub fn is_attachable(self) -> bool {
        self == SceneRole::Emitter || self.is_target()
    }

    /// Stable snake_case name
    pub fn as_str(self) -> &'static str {
        match self {
            SceneRole::Grid => "grid",
            SceneRole::Emitter => "emitter",
            SceneRole::TargetA => "target_a",
            SceneRole::TargetB => "target_b",
            SceneRole::TargetC => "target_c",
            SceneRole::BulletLine => "bullet_line",
            SceneRole::DebugGroup => "debug_group",
        }
    }
}

impl fmt::Display for SceneRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geometry attached to a node, in model space
#[derive(Debug, Clone, PartialEq, Default)]
pub enum NodeGeometry {
    /// Nothing to draw or test
    #[default]
    None,
    /// Line segments (grid, bullet line)
    Lines(Vec<(Vec3, Vec3)>),
    /// Mesh still loading
    Pending,
    /// Triangle mesh
    Mesh(Vec<Triangle>),
}

/// A single scene node
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    /// Display name
    pub name: String,
    /// Role in the scene
    pub role: SceneRole,
    /// Placement relative to the parent (the world, except for the bullet line)
    pub transform: Transform,
    /// Attached geometry
    pub geometry: NodeGeometry,
}

impl SceneNode {
    /// Node with no geometry
    pub fn new(name: impl Into<String>, role: SceneRole, transform: Transform) -> Self {
        Self {
            name: name.into(),
            role,
            transform,
            geometry: NodeGeometry::None,
        }
    }

    /// Attach geometry
    pub fn with_geometry(mut self, geometry: NodeGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// The node's triangles placed by its transform, if it has a loaded mesh
    pub fn placed_mesh(&self) -> Option<PlacedMesh<'_>> {
        match &self.geometry {
            NodeGeometry::Mesh(triangles) => Some(PlacedMesh::new(triangles, &self.transform)),
            _ => None,
        }
    }

    /// Whether the node's mesh is still loading
    pub fn is_pending(&self) -> bool {
        matches!(self.geometry, NodeGeometry::Pending)
    }
}

/// Scene lookup errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// No node registered for a required role
    #[error("no scene node with role {0}")]
    MissingRole(SceneRole),

    /// A second node tried to claim a role
    #[error("role {0} is already taken")]
    RoleTaken(SceneRole),
}

/// All scene nodes, indexed by key and by role
#[derive(Debug, Default)]
pub struct SceneRegistry {
    nodes: SlotMap<NodeKey, SceneNode>,
    roles: HashMap<SceneRole, NodeKey>,
}

impl SceneRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node under its role
    pub fn insert(&mut self, node: SceneNode) -> Result<NodeKey, SceneError> {
        let role = node.role;
        if self.roles.contains_key(&role) {
            return Err(SceneError::RoleTaken(role));
        }
        let key = self.nodes.insert(node);
        self.roles.insert(role, key);
        log::debug!("Registered scene node {role} as {key:?}");
        Ok(key)
    }

    /// Key of the node holding a role
    pub fn key(&self, role: SceneRole) -> Option<NodeKey> {
        self.roles.get(&role).copied()
    }

    /// Node by key
    pub fn node(&self, key: NodeKey) -> Option<&SceneNode> {
        self.nodes.get(key)
    }

    /// Mutable node by key
    pub fn node_mut(&mut self, key: NodeKey) -> Option<&mut SceneNode> {
        self.nodes.get_mut(key)
    }

    /// Node by role
    pub fn get(&self, role: SceneRole) -> Option<&SceneNode> {
        self.key(role).and_then(|key| self.nodes.get(key))
    }

    /// Mutable node by role
    pub fn get_mut(&mut self, role: SceneRole) -> Option<&mut SceneNode> {
        let key = self.key(role)?;
        self.nodes.get_mut(key)
    }

    /// Node by role, or [`SceneError::MissingRole`]
    pub fn require(&self, role: SceneRole) -> Result<&SceneNode, SceneError> {
        self.get(role).ok_or(SceneError::MissingRole(role))
    }

    /// Mutable node by role, or [`SceneError::MissingRole`]
    pub fn require_mut(&mut self, role: SceneRole) -> Result<&mut SceneNode, SceneError> {
        self.get_mut(role).ok_or(SceneError::MissingRole(role))
    }

    /// One entry per target slot, `None` while the slot is empty or loading
    pub fn targets(&self) -> impl Iterator<Item = Option<PlacedMesh<'_>>> + '_ {
        SceneRole::TARGETS
            .into_iter()
            .map(move |role| self.get(role).and_then(SceneNode::placed_mesh))
    }

    /// Replace a node's geometry with a loaded mesh
    pub fn set_mesh(&mut self, role: SceneRole, triangles: Vec<Triangle>) -> Result<(), SceneError> {
        let node = self.require_mut(role)?;
        log::debug!("{role} mesh ready with {} triangles", triangles.len());
        node.geometry = NodeGeometry::Mesh(triangles);
        Ok(())
    }

    /// Current emitter pose, read from the emitter node's transform
    pub fn emitter_pose(&self) -> Result<EmitterPose, SceneError> {
        let emitter = self.require(SceneRole::Emitter)?;
        Ok(EmitterPose::new(emitter.transform.position, emitter.transform.rotation))
    }

    /// World-space segments of the bullet line
    ///
    /// The bullet line is a child of the emitter, so its points go through
    /// its own transform and then the emitter's.
    pub fn bullet_line_world(&self) -> Result<Vec<(Vec3, Vec3)>, SceneError> {
        let emitter = self.require(SceneRole::Emitter)?;
        let line = self.require(SceneRole::BulletLine)?;
        let to_world = |p: Vec3| emitter.transform.transform_point(line.transform.transform_point(p));
        Ok(match &line.geometry {
            NodeGeometry::Lines(segments) => segments.iter().map(|&(a, b)| (to_world(a), to_world(b))).collect(),
            _ => Vec::new(),
        })
    }

    /// Nearest attachable node whose mesh the ray crosses
    pub fn pick(&self, ray: &Ray) -> Option<(NodeKey, f64)> {
        self.nodes
            .iter()
            .filter(|(_, node)| node.role.is_attachable())
            .filter_map(|(key, node)| Some((key, node.placed_mesh()?.pick(ray)?)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }

    /// Iterate all nodes
    pub fn iter(&self) -> impl Iterator<Item = (NodeKey, &SceneNode)> {
        self.nodes.iter()
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the registry has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
