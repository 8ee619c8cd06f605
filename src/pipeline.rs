use std::io::{self, Write};
use std::time::{Duration, Instant};

use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

use crate::config::PipelineConfig;
use crate::dump;
use crate::error::Result;
use crate::ingestion::{self, IngestionStats, LoadedMesh};
use crate::types::BoundingBox;

/// Summary of a completed pipeline run.
#[derive(Debug, Serialize)]
pub struct ProcessingResult {
    pub meshes: Vec<IngestionStats>,
    pub total_vertices: usize,
    pub total_faces: usize,
    /// Union of every mesh's bounds.
    pub bounds: Option<BoundingBox>,
    #[serde(skip)]
    pub duration: Duration,
}

/// Pipeline orchestrator: loads every input and reports on the batch.
pub struct Pipeline;

impl Pipeline {
    /// Load all inputs, print the requested report to stdout.
    pub fn run(config: &PipelineConfig) -> Result<ProcessingResult> {
        let (loaded, result) = Self::load(config)?;

        let stdout = io::stdout();
        let mut out = stdout.lock();
        if config.dump {
            // Keep stdout parseable when it carries JSON.
            if config.json {
                write_dumps(&loaded, io::stderr().lock())?;
            } else {
                write_dumps(&loaded, &mut out)?;
            }
        }
        if config.json {
            serde_json::to_writer_pretty(&mut out, &result).map_err(io::Error::from)?;
            writeln!(out)?;
        } else {
            print_summary(&result, &mut out)?;
        }

        Ok(result)
    }

    /// Load all inputs without printing anything.
    ///
    /// Each mesh is built start to finish on a single worker. The first
    /// failing input aborts the batch.
    pub fn load(config: &PipelineConfig) -> Result<(Vec<LoadedMesh>, ProcessingResult)> {
        let start = Instant::now();
        info!(inputs = config.inputs.len(), "Starting pipeline");

        let loaded = config
            .inputs
            .par_iter()
            .map(|path| ingestion::load_mesh(path, &config.mesh))
            .collect::<Result<Vec<_>>>()?;

        let meshes: Vec<IngestionStats> = loaded.iter().map(ingestion::compute_stats).collect();
        let total_vertices = meshes.iter().map(|m| m.vertices).sum();
        let total_faces = meshes.iter().map(|m| m.faces).sum();
        let bounds = meshes
            .iter()
            .filter_map(|m| m.bounds)
            .reduce(|a, b| a.merge(&b));

        let duration = start.elapsed();
        info!(
            meshes = meshes.len(),
            total_vertices,
            total_faces,
            elapsed = ?duration,
            "Pipeline complete"
        );

        Ok((
            loaded,
            ProcessingResult {
                meshes,
                total_vertices,
                total_faces,
                bounds,
                duration,
            },
        ))
    }
}

fn write_dumps<W: Write>(loaded: &[LoadedMesh], mut out: W) -> io::Result<()> {
    for mesh in loaded {
        writeln!(out, "=== {} ===", mesh.path.display())?;
        dump::write_dump(&mesh.mesh, &mut out)?;
    }
    Ok(())
}

/// Print per-mesh stats and bounding boxes.
fn print_summary<W: Write>(result: &ProcessingResult, out: &mut W) -> io::Result<()> {
    for stats in &result.meshes {
        writeln!(out, "=== {} ===", stats.path)?;
        writeln!(out, "  Vertices:  {}", stats.vertices)?;
        writeln!(out, "  Faces:     {}", stats.faces)?;
        writeln!(out, "  Normals:   {}", if stats.has_normals { "yes" } else { "no" })?;
        if stats.degenerate_faces > 0 || stats.fallback_vertices > 0 {
            writeln!(
                out,
                "  Defaults:  {} degenerate faces, {} fallback normals",
                stats.degenerate_faces, stats.fallback_vertices
            )?;
        }
        if let Some(bb) = &stats.bounds {
            print_bounds(bb, out)?;
        }
    }
    if let Some(bb) = &result.bounds {
        writeln!(out, "=== Scene ===")?;
        print_bounds(bb, out)?;
    }
    writeln!(
        out,
        "Total: {} meshes, {} vertices, {} faces in {:.3}s",
        result.meshes.len(),
        result.total_vertices,
        result.total_faces,
        result.duration.as_secs_f64()
    )
}

fn print_bounds<W: Write>(bb: &BoundingBox, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "  Bounding box: ({:.4}, {:.4}, {:.4}) → ({:.4}, {:.4}, {:.4})",
        bb.min[0], bb.min[1], bb.min[2], bb.max[0], bb.max[1], bb.max[2]
    )?;
    let c = bb.center();
    writeln!(out, "  Center:       ({:.4}, {:.4}, {:.4})", c[0], c[1], c[2])?;
    let h = bb.half_extents();
    writeln!(out, "  Half extents: ({:.4}, {:.4}, {:.4})", h[0], h[1], h[2])?;
    writeln!(out, "  Diagonal:     {:.4}", bb.diagonal())
}
