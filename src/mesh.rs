//! Triangle mesh: a vertex array plus a flat index array.

use std::fmt;
use std::path::Path;

use crate::math::bounds::BoundingBox;
use crate::math::vec3::Vec3;
use crate::triangle::Triangle;

/// Errors from mesh construction or file loading.
#[derive(Debug)]
pub enum MeshError {
    /// The index array length is not a multiple of three.
    IndexCountNotMultipleOfThree(usize),
    /// An index refers past the end of the vertex array.
    IndexOutOfRange { index: u32, vertex_count: usize },
    /// The OBJ loader failed.
    Load(tobj::LoadError),
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeshError::IndexCountNotMultipleOfThree(count) => {
                write!(f, "index count {count} is not a multiple of 3")
            }
            MeshError::IndexOutOfRange {
                index,
                vertex_count,
            } => write!(f, "index {index} out of range for {vertex_count} vertices"),
            MeshError::Load(e) => write!(f, "failed to load mesh: {e}"),
        }
    }
}

impl std::error::Error for MeshError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MeshError::Load(e) => Some(e),
            _ => None,
        }
    }
}

impl From<tobj::LoadError> for MeshError {
    fn from(e: tobj::LoadError) -> Self {
        MeshError::Load(e)
    }
}

/// An indexed triangle mesh, immutable within a frame.
///
/// Consecutive index triples reference the vertices of one triangle.
/// Construction validates the two structural invariants (index count
/// divisible by three, all indices in range), so iteration never has to.
#[derive(Clone, Debug)]
pub struct Mesh {
    vertices: Vec<Vec3>,
    indices: Vec<u32>,
}

impl Mesh {
    pub fn new(vertices: Vec<Vec3>, indices: Vec<u32>) -> Result<Self, MeshError> {
        if indices.len() % 3 != 0 {
            return Err(MeshError::IndexCountNotMultipleOfThree(indices.len()));
        }
        if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertices.len()) {
            return Err(MeshError::IndexOutOfRange {
                index,
                vertex_count: vertices.len(),
            });
        }

        Ok(Self { vertices, indices })
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Lazy, restartable iteration over the mesh triangles in index order.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.indices.chunks_exact(3).map(|chunk| {
            Triangle::new(
                self.vertices[chunk[0] as usize],
                self.vertices[chunk[1] as usize],
                self.vertices[chunk[2] as usize],
            )
        })
    }

    /// Local-space bounding box over all vertices.
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::from_points(&self.vertices)
    }

    /// The unit cube: 8 vertices at +-0.5, 12 triangles with outward
    /// counter-clockwise winding.
    pub fn cube() -> Self {
        let vertices = vec![
            Vec3::new(0.5, 0.5, 0.5),
            Vec3::new(-0.5, 0.5, 0.5),
            Vec3::new(0.5, 0.5, -0.5),
            Vec3::new(-0.5, 0.5, -0.5),
            Vec3::new(0.5, -0.5, 0.5),
            Vec3::new(-0.5, -0.5, 0.5),
            Vec3::new(0.5, -0.5, -0.5),
            Vec3::new(-0.5, -0.5, -0.5),
        ];

        #[rustfmt::skip]
        let indices = vec![
            // Top
            0, 2, 1,
            1, 2, 3,
            // Bottom
            4, 5, 6,
            7, 6, 5,
            // Left
            6, 3, 2,
            3, 6, 7,
            // Right
            0, 1, 4,
            1, 5, 4,
            // Front
            0, 4, 6,
            0, 6, 2,
            // Back
            1, 7, 5,
            1, 3, 7,
        ];

        // Static data satisfies both invariants by inspection
        Self { vertices, indices }
    }

    /// Loads a mesh from an OBJ file.
    ///
    /// All models in the file are merged into a single position stream;
    /// faces are triangulated by the loader.
    pub fn from_obj<P: AsRef<Path>>(path: P) -> Result<Self, MeshError> {
        let (models, _) = tobj::load_obj(path.as_ref(), &tobj::GPU_LOAD_OPTIONS)?;

        let mut vertices = Vec::new();
        let mut indices = Vec::new();

        for model in &models {
            let mesh = &model.mesh;
            let base = vertices.len() as u32;

            vertices.extend(
                mesh.positions
                    .chunks_exact(3)
                    .map(|p| Vec3::new(p[0], p[1], p[2])),
            );
            indices.extend(mesh.indices.iter().map(|&i| base + i));
        }

        Self::new(vertices, indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn new_rejects_ragged_index_counts() {
        let result = Mesh::new(vec![Vec3::ZERO, Vec3::RIGHT], vec![0, 1]);
        assert!(matches!(
            result,
            Err(MeshError::IndexCountNotMultipleOfThree(2))
        ));
    }

    #[test]
    fn new_rejects_out_of_range_indices() {
        let result = Mesh::new(vec![Vec3::ZERO, Vec3::RIGHT], vec![0, 1, 2]);
        assert!(matches!(
            result,
            Err(MeshError::IndexOutOfRange {
                index: 2,
                vertex_count: 2
            })
        ));
    }

    #[test]
    fn empty_mesh_is_legal_and_draws_nothing() {
        let mesh = Mesh::new(vec![], vec![]).unwrap();
        assert_eq!(mesh.triangles().count(), 0);
    }

    #[test]
    fn triangles_groups_indices_in_threes() {
        let mesh = Mesh::new(
            vec![Vec3::ZERO, Vec3::RIGHT, Vec3::UP, Vec3::BACK],
            vec![0, 1, 2, 0, 2, 3],
        )
        .unwrap();

        let tris: Vec<Triangle> = mesh.triangles().collect();
        assert_eq!(tris.len(), 2);
        assert_eq!(tris[0], Triangle::new(Vec3::ZERO, Vec3::RIGHT, Vec3::UP));
        assert_eq!(tris[1], Triangle::new(Vec3::ZERO, Vec3::UP, Vec3::BACK));
    }

    #[test]
    fn triangles_is_restartable() {
        let mesh = Mesh::cube();
        assert_eq!(mesh.triangles().count(), 12);
        assert_eq!(mesh.triangles().count(), 12);
    }

    #[test]
    fn cube_normals_point_outward() {
        let mesh = Mesh::cube();
        for tri in mesh.triangles() {
            // Each face normal points away from the cube center
            assert!(tri.normal().dot(tri.centroid()) > 0.0);
        }
    }

    #[test]
    fn cube_bounds_span_the_half_unit_box() {
        let bounds = Mesh::cube().bounds();
        assert_relative_eq!(bounds.min.x, -0.5);
        assert_relative_eq!(bounds.max.y, 0.5);
    }
}
