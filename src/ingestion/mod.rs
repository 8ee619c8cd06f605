pub mod header;
pub mod lines;
pub mod ply_loader;

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::config::MeshConfig;
use crate::error::Result;
use crate::processing::{self, NormalStats};
use crate::types::{BoundingBox, Mesh};

pub use header::Header;
pub use ply_loader::{load_ply, parse_ply};

/// A mesh that went through the full ingestion stage.
#[derive(Debug)]
pub struct LoadedMesh {
    pub path: PathBuf,
    pub mesh: Mesh,
    /// `None` when normal synthesis was disabled.
    pub normals: Option<NormalStats>,
}

/// Summary of one loaded mesh.
#[derive(Debug, Clone, Serialize)]
pub struct IngestionStats {
    pub path: String,
    pub vertices: usize,
    pub faces: usize,
    pub has_normals: bool,
    pub degenerate_faces: usize,
    pub fallback_vertices: usize,
    pub bounds: Option<BoundingBox>,
}

/// Parse, synthesize normals and compute bounds for one file.
///
/// Any structural error aborts the whole load; no partial mesh is returned.
pub fn load_mesh(path: &Path, config: &MeshConfig) -> Result<LoadedMesh> {
    let mut mesh = ply_loader::load_ply(path)?;

    let normals = config
        .normals
        .enabled
        .then(|| processing::synthesize_normals(&mut mesh, &config.normals));

    if config.compute_bounds {
        processing::compute_bounds(&mut mesh);
    }

    info!(
        path = %path.display(),
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        normals = mesh.has_normals(),
        "Loaded mesh"
    );

    Ok(LoadedMesh {
        path: path.to_path_buf(),
        mesh,
        normals,
    })
}

/// Compute summary statistics for a loaded mesh.
pub fn compute_stats(loaded: &LoadedMesh) -> IngestionStats {
    let normals = loaded.normals.unwrap_or_default();
    IngestionStats {
        path: loaded.path.display().to_string(),
        vertices: loaded.mesh.vertex_count(),
        faces: loaded.mesh.face_count(),
        has_normals: loaded.mesh.has_normals(),
        degenerate_faces: normals.degenerate_faces,
        fallback_vertices: normals.fallback_vertices,
        bounds: loaded.mesh.bounds(),
    }
}
