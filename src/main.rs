use anyhow::Context;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use ply_mesh::config::{CliArgs, PipelineConfig};
use ply_mesh::pipeline::Pipeline;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // Init tracing
    let filter = if args.verbose {
        EnvFilter::new("ply_mesh=debug")
    } else {
        EnvFilter::new("ply_mesh=info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config: PipelineConfig = args.into();

    if let Some(threads) = config.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure rayon thread pool")?;
    }

    match Pipeline::run(&config) {
        Ok(_) => Ok(()),
        Err(e) => {
            error!(%e, "Mesh loading failed");
            Err(anyhow::anyhow!(e)).context("ply-mesh failed")
        }
    }
}
