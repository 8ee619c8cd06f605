use bytemuck::{Pod, Zeroable};

use crate::error::{MeshError, Result};
use crate::types::BoundingBox;

/// One interleaved vertex record: position followed by shading normal.
///
/// Laid out as 6 contiguous `f32`s so the vertex buffer can be uploaded
/// as-is with a 24-byte stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    /// A vertex at `position` with a zeroed normal.
    pub fn at(position: [f32; 3]) -> Self {
        Self {
            position,
            normal: [0.0; 3],
        }
    }
}

/// Three 0-based indices into the vertex buffer.
pub type Face = [u32; 3];

/// A loaded triangle mesh.
///
/// Both buffers are sized once when the mesh is built and never grow or
/// shrink afterwards. Every face index is guaranteed to be in range.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    faces: Vec<Face>,
    has_normals: bool,
    bounds: Option<BoundingBox>,
}

impl Mesh {
    /// Bytes between consecutive vertex records.
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
    /// Byte offset of the normal within a vertex record.
    pub const NORMAL_OFFSET: usize = std::mem::size_of::<[f32; 3]>();

    /// Build a mesh from raw positions and faces, validating every index.
    pub fn from_parts(positions: Vec<[f32; 3]>, faces: Vec<Face>) -> Result<Self> {
        validate_faces(&faces, positions.len())?;
        let vertices = positions.into_iter().map(Vertex::at).collect();
        Ok(Self::from_buffers(vertices, faces))
    }

    /// Buffers already checked by the caller.
    pub(crate) fn from_buffers(vertices: Vec<Vertex>, faces: Vec<Face>) -> Self {
        Self {
            vertices,
            faces,
            has_normals: false,
            bounds: None,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Whether the mesh contains no geometry.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Whether the normal slots hold synthesized unit normals.
    ///
    /// While this is `false` every normal reads as zero and must not be
    /// used for shading.
    pub fn has_normals(&self) -> bool {
        self.has_normals
    }

    /// Axis-aligned bounds, once computed. `None` for an empty mesh.
    pub fn bounds(&self) -> Option<BoundingBox> {
        self.bounds
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Vertex buffer as a flat `[x, y, z, nx, ny, nz, ...]` slice.
    pub fn vertex_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Face buffer as a flat triangle index list.
    pub fn indices(&self) -> &[u32] {
        bytemuck::cast_slice(&self.faces)
    }

    /// Raw vertex buffer bytes for GPU upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw index buffer bytes for GPU upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.faces)
    }

    /// Position of vertex `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.vertex_count()`.
    pub fn position(&self, index: usize) -> [f32; 3] {
        self.vertices[index].position
    }

    /// Normal of vertex `index`; zero until normals are synthesized.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.vertex_count()`.
    pub fn normal(&self, index: usize) -> [f32; 3] {
        self.vertices[index].normal
    }

    // Mutable access is limited to a slice so passes can never reallocate.
    pub(crate) fn vertices_mut(&mut self) -> &mut [Vertex] {
        &mut self.vertices
    }

    pub(crate) fn set_has_normals(&mut self, has_normals: bool) {
        self.has_normals = has_normals;
    }

    pub(crate) fn set_bounds(&mut self, bounds: Option<BoundingBox>) {
        self.bounds = bounds;
    }
}

/// Check that every index of every face addresses an existing vertex.
pub(crate) fn validate_faces(faces: &[Face], vertex_count: usize) -> Result<()> {
    for (face, indices) in faces.iter().enumerate() {
        check_face(face, indices, vertex_count)?;
    }
    Ok(())
}

pub(crate) fn check_face(face: usize, indices: &Face, vertex_count: usize) -> Result<()> {
    match indices.iter().find(|&&i| i as usize >= vertex_count) {
        Some(&index) => Err(MeshError::IndexOutOfRange {
            face,
            index,
            vertex_count,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Mesh {
        Mesh::from_parts(
            vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            vec![[0, 1, 2]],
        )
        .unwrap()
    }

    #[test]
    fn empty_mesh() {
        let mesh = Mesh::default();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.face_count(), 0);
        assert!(!mesh.has_normals());
        assert!(mesh.bounds().is_none());
        assert!(mesh.vertex_bytes().is_empty());
        assert!(mesh.index_bytes().is_empty());
    }

    #[test]
    fn single_triangle() {
        let mesh = triangle();
        assert!(!mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.position(1), [1.0, 0.0, 0.0]);
        assert_eq!(mesh.normal(1), [0.0, 0.0, 0.0]);
        assert!(!mesh.has_normals());
    }

    #[test]
    fn flat_views_are_interleaved() {
        let mesh = triangle();
        let floats = mesh.vertex_floats();
        assert_eq!(floats.len(), 18);
        assert_eq!(&floats[6..12], &[1.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(mesh.indices(), &[0, 1, 2]);
        assert_eq!(mesh.vertex_bytes().len(), 3 * Mesh::STRIDE);
        assert_eq!(mesh.index_bytes().len(), 12);
    }

    #[test]
    #[should_panic]
    fn position_out_of_range_panics() {
        triangle().position(3);
    }

    #[test]
    fn layout_constants() {
        assert_eq!(Mesh::STRIDE, 24);
        assert_eq!(Mesh::NORMAL_OFFSET, 12);
    }

    #[test]
    fn from_parts_rejects_out_of_range_index() {
        let err = Mesh::from_parts(vec![[0.0; 3]; 3], vec![[0, 1, 2], [2, 3, 0]]).unwrap_err();
        assert!(matches!(
            err,
            MeshError::IndexOutOfRange {
                face: 1,
                index: 3,
                vertex_count: 3
            }
        ));
    }
}
