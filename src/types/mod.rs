pub mod bounds;
pub mod mesh;

pub use bounds::BoundingBox;
pub use mesh::{Face, Mesh, Vertex};
