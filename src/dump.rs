//! Human-readable listing of a mesh's buffers, for debugging.

use std::fmt;
use std::io;

use crate::types::Mesh;

/// `Display` adapter that lists every vertex and face in storage order.
///
/// ```text
/// Vertex List:
/// [0]: 0, 0, 0 | 0, 0, 1
/// ...
/// Face List:
/// [0]: 0, 1, 2
/// ```
pub struct MeshDump<'a>(pub &'a Mesh);

impl fmt::Display for MeshDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mesh = self.0;
        writeln!(f, "Vertex List:")?;
        for (i, v) in mesh.vertices().iter().enumerate() {
            let [x, y, z] = v.position;
            let [nx, ny, nz] = v.normal;
            writeln!(f, "[{i}]: {x}, {y}, {z} | {nx}, {ny}, {nz}")?;
        }
        writeln!(f, "Face List:")?;
        for (i, [a, b, c]) in mesh.faces().iter().enumerate() {
            writeln!(f, "[{i}]: {a}, {b}, {c}")?;
        }
        Ok(())
    }
}

/// Write the listing to any byte sink.
pub fn write_dump<W: io::Write>(mesh: &Mesh, mut out: W) -> io::Result<()> {
    write!(out, "{}", MeshDump(mesh))?;
    out.flush()
}
