use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use tracing::{debug, warn};

use super::header::{Header, read_header};
use super::lines::LineReader;
use crate::error::{MeshError, Result};
use crate::types::mesh::check_face;
use crate::types::{Face, Mesh, Vertex};

/// Load an ASCII PLY file into a `Mesh`.
///
/// Normals are left zeroed; see [`crate::processing::normals`].
pub fn load_ply(path: &Path) -> Result<Mesh> {
    let file = File::open(path).map_err(|source| MeshError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    parse_ply(BufReader::new(file))
}

/// Parse an ASCII PLY stream: header, then the vertex block, then the face block.
pub fn parse_ply<R: BufRead>(reader: R) -> Result<Mesh> {
    let mut lines = LineReader::new(reader);
    let header = read_header(&mut lines)?;

    let mut vertices = allocate::<Vertex>("vertex", header.vertex_count)?;
    let mut faces = allocate::<Face>("face", header.face_count)?;

    read_vertices(&mut lines, &header, &mut vertices)?;
    read_faces(&mut lines, &header, &mut faces)?;

    debug!(
        vertices = vertices.len(),
        faces = faces.len(),
        lines = lines.line_number(),
        "Parsed PLY body"
    );

    Ok(Mesh::from_buffers(vertices, faces))
}

/// Reserve exactly `count` records up front; the buffer never grows past it.
fn allocate<T>(element: &'static str, count: usize) -> Result<Vec<T>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(count)
        .map_err(|_| MeshError::Allocation { element, count })?;
    Ok(buf)
}

fn read_vertices<R: BufRead>(
    lines: &mut LineReader<R>,
    header: &Header,
    vertices: &mut Vec<Vertex>,
) -> Result<()> {
    for found in 0..header.vertex_count {
        let Some((line_no, line)) = lines.next_line()? else {
            return Err(MeshError::UnexpectedEof {
                section: "vertex",
                expected: header.vertex_count,
                found,
            });
        };
        // Trailing properties (normals, colours, confidence) are discarded.
        let position: [f32; 3] = parse_fields(line.split_whitespace(), line_no, "vertex")?;
        // f32 parsing accepts "nan" and "inf", which are not positions.
        if let Some(axis) = position.iter().position(|v| !v.is_finite()) {
            let token = line.split_whitespace().nth(axis).unwrap_or_default();
            return Err(MeshError::InvalidNumber {
                line: line_no,
                token: token.to_string(),
            });
        }
        vertices.push(Vertex::at(position));
    }
    Ok(())
}

fn read_faces<R: BufRead>(
    lines: &mut LineReader<R>,
    header: &Header,
    faces: &mut Vec<Face>,
) -> Result<()> {
    for found in 0..header.face_count {
        let Some((line_no, line)) = lines.next_line()? else {
            return Err(MeshError::UnexpectedEof {
                section: "face",
                expected: header.face_count,
                found,
            });
        };

        let mut tokens = line.split_whitespace();
        let Some(arity) = tokens.next() else {
            return Err(MeshError::MissingToken {
                line: line_no,
                section: "face",
                expected: 4,
                found: 0,
            });
        };
        if arity != "3" {
            warn!(
                line = line_no,
                arity,
                "Face is not declared as a triangle, reading first 3 indices"
            );
        }

        let face: Face = parse_fields(tokens, line_no, "face")?;
        check_face(found, &face, header.vertex_count)?;
        faces.push(face);
    }
    Ok(())
}

/// Parse the first `N` tokens as numbers of type `T`.
fn parse_fields<'a, T: FromStr + Copy + Default, const N: usize>(
    mut tokens: impl Iterator<Item = &'a str>,
    line: usize,
    section: &'static str,
) -> Result<[T; N]> {
    let mut out = [T::default(); N];
    for (found, slot) in out.iter_mut().enumerate() {
        let token = tokens.next().ok_or(MeshError::MissingToken {
            line,
            section,
            expected: N,
            found,
        })?;
        *slot = token.parse().map_err(|_| MeshError::InvalidNumber {
            line,
            token: token.to_string(),
        })?;
    }
    Ok(out)
}
