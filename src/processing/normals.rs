use glam::Vec3;
use tracing::{debug, warn};

use crate::config::NormalConfig;
use crate::types::Mesh;

/// Outcome of a normal synthesis pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalStats {
    /// Faces whose cross product could not be normalized.
    pub degenerate_faces: usize,
    /// Vertices that received the fallback normal.
    pub fallback_vertices: usize,
}

/// Derive smooth per-vertex normals from face topology.
///
/// Every non-degenerate face contributes its unit normal (right-hand rule
/// over the listed winding) to its three vertices with equal weight,
/// regardless of area. Each vertex's sum is then normalized in place.
///
/// Degenerate faces contribute nothing. Vertices whose sum is too short to
/// normalize (unreferenced, or only touched by degenerate faces) get
/// `config.fallback`.
///
/// A mesh without vertices or faces is left untouched and keeps
/// `has_normals() == false`.
pub fn synthesize_normals(mesh: &mut Mesh, config: &NormalConfig) -> NormalStats {
    let mut stats = NormalStats::default();
    if mesh.vertex_count() == 0 || mesh.face_count() == 0 {
        return stats;
    }

    let mut accum = vec![Vec3::ZERO; mesh.vertex_count()];

    for face in mesh.faces() {
        let [a, b, c] = face.map(|i| i as usize);
        let Some(n) = face_normal(
            mesh.position(a),
            mesh.position(b),
            mesh.position(c),
            config.epsilon,
        ) else {
            stats.degenerate_faces += 1;
            continue;
        };
        accum[a] += n;
        accum[b] += n;
        accum[c] += n;
    }

    let fallback = Vec3::from(config.fallback).normalize_or(Vec3::Y);
    for (vertex, sum) in mesh.vertices_mut().iter_mut().zip(&accum) {
        let normal = match sum.try_normalize() {
            Some(n) if sum.length_squared() >= config.epsilon => n,
            _ => {
                stats.fallback_vertices += 1;
                fallback
            }
        };
        vertex.normal = normal.to_array();
    }
    mesh.set_has_normals(true);

    if stats.degenerate_faces > 0 || stats.fallback_vertices > 0 {
        warn!(
            degenerate_faces = stats.degenerate_faces,
            fallback_vertices = stats.fallback_vertices,
            "Substituted default normals"
        );
    }
    debug!(vertices = accum.len(), "Synthesized vertex normals");

    stats
}

/// Unit normal of the triangle `p0 p1 p2`, or `None` if it is degenerate.
///
/// Edges are rescaled by their largest component before the cross product,
/// so very large or very small coordinates neither overflow nor underflow.
/// `epsilon` therefore applies to the rescaled cross product.
fn face_normal(p0: [f32; 3], p1: [f32; 3], p2: [f32; 3], epsilon: f32) -> Option<Vec3> {
    let p0 = Vec3::from(p0);
    let e1 = Vec3::from(p1) - p0;
    let e2 = Vec3::from(p2) - p0;

    let scale = e1.abs().max_element().max(e2.abs().max_element());
    if !scale.is_finite() || scale == 0.0 {
        return None;
    }
    let n = (e1 / scale).cross(e2 / scale);
    if n.length_squared() < epsilon {
        return None;
    }
    n.try_normalize()
}
