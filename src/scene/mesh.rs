/// Indexed triangle mesh with per-vertex colours
use crate::rendering::Color;
use glam::Vec3;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshError {
    #[error("index count {0} is not a multiple of 3")]
    RaggedIndices(usize),

    #[error("index {index} at position {position} is out of bounds for {vertex_count} vertices")]
    IndexOutOfBounds {
        position: usize,
        index: u32,
        vertex_count: usize,
    },

    #[error("{colors} colours supplied for {vertices} vertices")]
    ColorCountMismatch { vertices: usize, colors: usize },
}

/// Unique positions plus an index list where each consecutive triple names
/// one triangle. `colors[i]` belongs to `vertices[i]`.
///
/// Fields are read-only outside the crate so a constructed mesh always
/// satisfies the checks in [`Mesh::new`].
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub(crate) vertices: Vec<Vec3>,
    pub(crate) indices: Vec<u32>,
    pub(crate) colors: Vec<Color>,
}

impl Mesh {
    pub fn new(vertices: Vec<Vec3>, indices: Vec<u32>, colors: Vec<Color>) -> Result<Self, MeshError> {
        if indices.len() % 3 != 0 {
            return Err(MeshError::RaggedIndices(indices.len()));
        }
        if colors.len() != vertices.len() {
            return Err(MeshError::ColorCountMismatch {
                vertices: vertices.len(),
                colors: colors.len(),
            });
        }
        if let Some((position, &index)) = indices
            .iter()
            .enumerate()
            .find(|&(_, &index)| index as usize >= vertices.len())
        {
            return Err(MeshError::IndexOutOfBounds {
                position,
                index,
                vertex_count: vertices.len(),
            });
        }

        Ok(Self {
            vertices,
            indices,
            colors,
        })
    }

    /// One triangle with a colour per corner.
    pub fn triangle(positions: [Vec3; 3], colors: [Color; 3]) -> Self {
        Self {
            vertices: positions.to_vec(),
            indices: vec![0, 1, 2],
            colors: colors.to_vec(),
        }
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    #[inline]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> (Vec<Vec3>, Vec<Color>) {
        (
            vec![Vec3::ZERO, Vec3::X, Vec3::new(1.0, 1.0, 0.0), Vec3::Y],
            vec![Color::RED; 4],
        )
    }

    #[test]
    fn accepts_valid_quad() {
        let (vertices, colors) = quad();
        let mesh = Mesh::new(vertices, vec![0, 1, 2, 0, 2, 3], colors).unwrap();
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.vertex_count(), 4);
    }

    #[test]
    fn rejects_ragged_index_list() {
        let (vertices, colors) = quad();
        assert_eq!(
            Mesh::new(vertices, vec![0, 1, 2, 3], colors).unwrap_err(),
            MeshError::RaggedIndices(4)
        );
    }

    #[test]
    fn rejects_out_of_range_index() {
        let (vertices, colors) = quad();
        assert_eq!(
            Mesh::new(vertices, vec![0, 1, 4], colors).unwrap_err(),
            MeshError::IndexOutOfBounds {
                position: 2,
                index: 4,
                vertex_count: 4
            }
        );
    }

    #[test]
    fn rejects_missing_colours() {
        let (vertices, _) = quad();
        assert!(matches!(
            Mesh::new(vertices, vec![0, 1, 2], vec![Color::RED]),
            Err(MeshError::ColorCountMismatch { vertices: 4, colors: 1 })
        ));
    }
}
