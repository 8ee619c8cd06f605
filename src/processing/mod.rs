pub mod bounds;
pub mod normals;

pub use bounds::{bounding_box, compute_bounds};
pub use normals::{NormalStats, synthesize_normals};
