use std::path::PathBuf;

use clap::Parser;

/// Normal synthesis parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalConfig {
    pub enabled: bool,
    /// Squared-length threshold below which a vector is treated as zero.
    /// Face cross products are measured after rescaling the edges to unit size.
    pub epsilon: f32,
    /// Normal assigned to vertices with no usable face contribution.
    pub fallback: [f32; 3],
}

impl Default for NormalConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            epsilon: 1e-20,
            fallback: [0.0, 1.0, 0.0],
        }
    }
}

/// Per-mesh processing applied after parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshConfig {
    pub normals: NormalConfig,
    pub compute_bounds: bool,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            normals: NormalConfig::default(),
            compute_bounds: true,
        }
    }
}

/// Fully resolved pipeline configuration (constructed from CLI args).
#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    pub inputs: Vec<PathBuf>,
    pub mesh: MeshConfig,
    pub dump: bool,
    pub json: bool,
    pub verbose: bool,
    pub threads: Option<usize>,
}

/// CLI argument definition (clap derive).
#[derive(Parser, Debug)]
#[command(
    name = "ply-mesh",
    about = "Load ASCII PLY meshes, synthesize vertex normals and report bounds",
    version
)]
pub struct CliArgs {
    /// Input PLY file (repeatable)
    #[arg(short = 'i', long = "input", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Keep normal slots zeroed instead of synthesizing them
    #[arg(long)]
    pub no_normals: bool,

    /// Skip the bounding box pass
    #[arg(long)]
    pub no_bounds: bool,

    /// Print every vertex and face after loading
    #[arg(long)]
    pub dump: bool,

    /// Emit the summary as JSON
    #[arg(long, conflicts_with = "dump")]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Worker thread count (default: all cores)
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,
}

impl From<CliArgs> for PipelineConfig {
    fn from(args: CliArgs) -> Self {
        PipelineConfig {
            inputs: args.inputs,
            mesh: MeshConfig {
                normals: NormalConfig {
                    enabled: !args.no_normals,
                    ..Default::default()
                },
                compute_bounds: !args.no_bounds,
            },
            dump: args.dump,
            json: args.json,
            verbose: args.verbose,
            threads: args.threads,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mesh_config() {
        let mc = MeshConfig::default();
        assert!(mc.normals.enabled);
        assert!(mc.compute_bounds);
        assert_eq!(mc.normals.fallback, [0.0, 1.0, 0.0]);
        assert!(mc.normals.epsilon > 0.0);
    }

    #[test]
    fn cli_args_to_pipeline_config() {
        let args = CliArgs::parse_from([
            "ply-mesh",
            "-i",
            "models/bun_zipper_res4.ply",
            "--input",
            "models/dragon_vrip_res4.ply",
            "--no-normals",
            "--no-bounds",
            "--dump",
            "-v",
            "-j",
            "3",
        ]);

        let config: PipelineConfig = args.into();

        assert_eq!(
            config.inputs,
            vec![
                PathBuf::from("models/bun_zipper_res4.ply"),
                PathBuf::from("models/dragon_vrip_res4.ply"),
            ]
        );
        assert!(!config.mesh.normals.enabled);
        assert!(!config.mesh.compute_bounds);
        assert!(config.dump);
        assert!(!config.json);
        assert!(config.verbose);
        assert_eq!(config.threads, Some(3));
    }

    #[test]
    fn cli_args_minimal() {
        let args = CliArgs::parse_from(["ply-mesh", "-i", "happy_vrip_res4.ply"]);
        let config: PipelineConfig = args.into();

        assert_eq!(config.inputs, vec![PathBuf::from("happy_vrip_res4.ply")]);
        assert_eq!(config.mesh, MeshConfig::default());
        assert!(!config.dump);
        assert!(!config.json);
        assert!(!config.verbose);
        assert_eq!(config.threads, None);
    }

    #[test]
    fn cli_rejects_dump_with_json() {
        let err = CliArgs::try_parse_from(["ply-mesh", "-i", "a.ply", "--dump", "--json"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn cli_requires_an_input() {
        assert!(CliArgs::try_parse_from(["ply-mesh"]).is_err());
    }
}
