//! Asset loading
//!
//! Target meshes configured as OBJ files are read here, after the scene is
//! set up. Until a load completes the target's slot stays empty.

pub mod obj_loader;

pub use obj_loader::{ObjError, ObjLoader};

use crate::physics::collision::Triangle;
use std::path::Path;

/// Load an OBJ file as model-space collision triangles
pub fn load_collision_triangles<P: AsRef<Path>>(path: P) -> Result<Vec<Triangle>, ObjError> {
    let mesh = ObjLoader::load_obj(path)?;
    let triangles = mesh.triangles();
    if triangles.is_empty() {
        return Err(ObjError::InvalidFormat("No faces found in OBJ file".to_string()));
    }
    Ok(triangles)
}
