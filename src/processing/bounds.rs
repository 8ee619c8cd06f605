use crate::types::{BoundingBox, Mesh};

/// Component-wise min/max over every vertex position.
///
/// Returns `None` for a mesh without vertices.
pub fn bounding_box(mesh: &Mesh) -> Option<BoundingBox> {
    let mut positions = mesh.vertices().iter().map(|v| v.position);
    let first = positions.next()?;
    Some(positions.fold(BoundingBox::from_point(first), |mut bb, p| {
        bb.expand(p);
        bb
    }))
}

/// Compute the bounding box and store it on the mesh.
pub fn compute_bounds(mesh: &mut Mesh) -> Option<BoundingBox> {
    let bounds = bounding_box(mesh);
    mesh.set_bounds(bounds);
    bounds
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_mesh_has_no_bounds() {
        let mut mesh = Mesh::default();
        assert!(compute_bounds(&mut mesh).is_none());
        assert!(mesh.bounds().is_none());
    }

    #[test]
    fn single_vertex_is_a_point_box() {
        let mesh = Mesh::from_parts(vec![[1.0, -2.0, 3.0]], vec![]).unwrap();
        let bb = bounding_box(&mesh).unwrap();
        assert_eq!(bb.min, [1.0, -2.0, 3.0]);
        assert_eq!(bb.max, [1.0, -2.0, 3.0]);
    }

    #[test]
    fn box_is_tight_and_contains_all_vertices() {
        let positions = vec![
            [0.5, -1.0, 2.0],
            [-3.0, 4.0, 0.0],
            [1.0, 0.0, -7.5],
            [0.0, 2.0, 1.0],
        ];
        let mut mesh = Mesh::from_parts(positions.clone(), vec![[0, 1, 2]]).unwrap();
        let bb = compute_bounds(&mut mesh).unwrap();

        assert_eq!(bb.min, [-3.0, -1.0, -7.5]);
        assert_eq!(bb.max, [1.0, 4.0, 2.0]);
        assert!(positions.iter().all(|&p| bb.contains_point(p)));
        assert_eq!(mesh.bounds(), Some(bb));
    }
}
