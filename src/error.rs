use std::io;
use std::path::PathBuf;

/// All error types for PLY ingestion.
#[derive(thiserror::Error, Debug)]
pub enum MeshError {
    #[error("Failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Header has no end_header line")]
    MissingEndHeader,
    #[error("Line {line}: invalid element count in '{text}'")]
    InvalidCount { line: usize, text: String },
    #[error("Line {line}: element '{element}' declared more than once")]
    DuplicateElement { element: &'static str, line: usize },
    #[error("Cannot allocate buffer for {count} {element} records")]
    Allocation { element: &'static str, count: usize },
    #[error("Unexpected end of file in {section} section: expected {expected} lines, found {found}")]
    UnexpectedEof {
        section: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("Line {line}: {section} record needs {expected} values, found {found}")]
    MissingToken {
        line: usize,
        section: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("Line {line}: '{token}' is not a valid number")]
    InvalidNumber { line: usize, token: String },
    #[error("Face {face}: vertex index {index} out of range (vertex count {vertex_count})")]
    IndexOutOfRange {
        face: usize,
        index: u32,
        vertex_count: usize,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MeshError>;
