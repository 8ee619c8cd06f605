use std::io::BufRead;

use tracing::debug;

use super::lines::LineReader;
use crate::error::{MeshError, Result};

const VERTEX_DECL: &str = "element vertex";
const FACE_DECL: &str = "element face";
const END_HEADER: &str = "end_header";

/// Element counts declared by a PLY header.
///
/// Counts default to zero when the header never declares the element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Header {
    pub vertex_count: usize,
    pub face_count: usize,
}

/// Consume header lines up to and including `end_header`.
///
/// Only the vertex and face element declarations are interpreted; format,
/// property, comment and any other lines are skipped. Properties are assumed
/// to be `x y z [...]` for vertices and a `3 a b c` index list for faces.
pub fn read_header<R: BufRead>(lines: &mut LineReader<R>) -> Result<Header> {
    let mut vertex_count = None;
    let mut face_count = None;

    while let Some((line_no, line)) = lines.next_line()? {
        if line == END_HEADER {
            let header = Header {
                vertex_count: vertex_count.unwrap_or(0),
                face_count: face_count.unwrap_or(0),
            };
            debug!(
                vertex_count = header.vertex_count,
                face_count = header.face_count,
                header_lines = line_no,
                "Parsed PLY header"
            );
            return Ok(header);
        }

        if let Some(count) = declared_count(line, VERTEX_DECL, line_no)? {
            set_once(&mut vertex_count, count, "vertex", line_no)?;
        } else if let Some(count) = declared_count(line, FACE_DECL, line_no)? {
            set_once(&mut face_count, count, "face", line_no)?;
        }
    }

    Err(MeshError::MissingEndHeader)
}

/// Parse `<prefix> <count>`; `None` if the line is not this declaration.
fn declared_count(line: &str, prefix: &str, line_no: usize) -> Result<Option<usize>> {
    let Some(rest) = line.strip_prefix(prefix) else {
        return Ok(None);
    };
    if rest.is_empty() {
        return Err(MeshError::InvalidCount {
            line: line_no,
            text: line.to_string(),
        });
    }
    // "element vertex_color" and friends are other elements
    if !rest.starts_with(char::is_whitespace) {
        return Ok(None);
    }
    rest.trim()
        .parse::<usize>()
        .map(Some)
        .map_err(|_| MeshError::InvalidCount {
            line: line_no,
            text: line.to_string(),
        })
}

fn set_once(
    slot: &mut Option<usize>,
    count: usize,
    element: &'static str,
    line: usize,
) -> Result<()> {
    if slot.is_some() {
        return Err(MeshError::DuplicateElement { element, line });
    }
    *slot = Some(count);
    Ok(())
}
