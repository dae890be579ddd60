//! OBJ file loader for collision meshes
//!
//! Only geometry that matters for collision is kept: `v` positions and `f`
//! faces. Normals, texture coordinates, groups and materials are skipped.
//! Polygons are fan-triangulated around their first vertex.

use crate::foundation::math::Vec3;
use crate::physics::collision::MeshData;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

/// OBJ loading errors
#[derive(Error, Debug)]
pub enum ObjError {
    /// File could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// A record could not be parsed
    #[error("Parse error on line {line}: {message}")]
    ParseError {
        /// 1-based line number
        line: usize,
        /// What went wrong
        message: String,
    },
    /// The file parsed but holds nothing usable
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// Wavefront OBJ loader
pub struct ObjLoader;

impl ObjLoader {
    /// Load an OBJ file from disk
    pub fn load_obj<P: AsRef<Path>>(path: P) -> Result<MeshData, ObjError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let mesh = Self::parse(BufReader::new(file))?;
        log::info!(
            "Loaded {} ({} vertices, {} triangles)",
            path.display(),
            mesh.positions.len(),
            mesh.indices.len() / 3
        );
        Ok(mesh)
    }

    /// Parse OBJ text from any buffered reader
    pub fn parse<R: BufRead>(reader: R) -> Result<MeshData, ObjError> {
        let mut positions = Vec::new();
        let mut indices = Vec::new();

        for (number, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = number + 1;
            let parse_error = |message: String| ObjError::ParseError { line: line_no, message };

            let mut parts = line.split_whitespace();
            match parts.next() {
                Some("v") => {
                    let mut coord = |axis: &str| {
                        parts
                            .next()
                            .ok_or_else(|| parse_error(format!("missing vertex {axis}")))?
                            .parse::<f64>()
                            .map_err(|e| parse_error(format!("invalid vertex {axis}: {e}")))
                    };
                    let position = Vec3::new(coord("x")?, coord("y")?, coord("z")?);
                    positions.push(position);
                }
                Some("f") => {
                    let face = parts
                        .map(|vertex| resolve_index(vertex, positions.len()).map_err(&parse_error))
                        .collect::<Result<Vec<u32>, _>>()?;
                    if face.len() < 3 {
                        return Err(parse_error(format!("face needs 3 vertices, got {}", face.len())));
                    }

                    // Triangulate face (simple fan triangulation)
                    for i in 1..(face.len() - 1) {
                        indices.extend_from_slice(&[face[0], face[i], face[i + 1]]);
                    }
                }
                _ => {
                    // Comments, blank lines and attributes we do not use
                }
            }
        }

        if positions.is_empty() {
            return Err(ObjError::InvalidFormat("No vertices found in OBJ file".to_string()));
        }

        Ok(MeshData { positions, indices })
    }
}

/// Resolve one face vertex (`7`, `7/2`, `7//3`, `7/2/3` or negative) to a
/// 0-based position index
fn resolve_index(vertex: &str, vertex_count: usize) -> Result<u32, String> {
    let position = vertex.split('/').next().unwrap_or(vertex);
    let raw: i64 = position
        .parse()
        .map_err(|_| format!("invalid position index '{vertex}'"))?;

    let count = vertex_count as i64;
    let resolved = match raw {
        0 => return Err("position index 0 is not valid".to_string()),
        r if r > 0 => r - 1,
        r => count + r,
    };

    if !(0..count).contains(&resolved) {
        return Err(format!("position index {raw} out of bounds ({vertex_count} vertices)"));
    }
    u32::try_from(resolved).map_err(|_| format!("position index {raw} too large"))
}
