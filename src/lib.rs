pub mod config;
pub mod dump;
pub mod error;
pub mod ingestion;
pub mod pipeline;
pub mod processing;
pub mod types;

pub use config::{MeshConfig, NormalConfig, PipelineConfig};
pub use error::{MeshError, Result};
pub use ingestion::{load_mesh, load_ply, parse_ply};
pub use pipeline::Pipeline;
pub use types::{BoundingBox, Face, Mesh, Vertex};
