/// Flat tiled ground plane centred on the origin
use super::mesh::{Mesh, MeshError};
use crate::rendering::Color;
use glam::Vec3;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Platform {
    pub width: f32,
    pub length: f32,
    /// Total tile count; the grid is `floor(sqrt(tiles))` tiles per side.
    pub tiles: u32,
    pub primary: Color,
    pub secondary: Color,
}

impl Default for Platform {
    fn default() -> Self {
        Self {
            width: 1000.0,
            length: 1000.0,
            tiles: 100,
            primary: Color::GRASS,
            secondary: Color::MOSS,
        }
    }
}

impl Platform {
    pub fn tiles_per_side(&self) -> u32 {
        (self.tiles as f32).sqrt() as u32
    }

    /// Build the grid at `y = 0`: four vertices and two triangles per tile,
    /// alternating tile colours in a checkerboard.
    pub fn build_mesh(&self) -> Result<Mesh, MeshError> {
        let per_side = self.tiles_per_side();
        let tile_count = (per_side * per_side) as usize;

        let tile_width = self.width / per_side.max(1) as f32;
        let tile_length = self.length / per_side.max(1) as f32;
        let start_x = -self.width / 2.0;
        let start_z = -self.length / 2.0;

        let mut vertices = Vec::with_capacity(4 * tile_count);
        let mut colors = Vec::with_capacity(4 * tile_count);
        let mut indices = Vec::with_capacity(6 * tile_count);

        for row in 0..per_side {
            for col in 0..per_side {
                let x1 = start_x + col as f32 * tile_width;
                let x2 = start_x + (col + 1) as f32 * tile_width;
                let z1 = start_z + row as f32 * tile_length;
                let z2 = start_z + (row + 1) as f32 * tile_length;

                let base = vertices.len() as u32;
                vertices.extend_from_slice(&[
                    Vec3::new(x1, 0.0, z1),
                    Vec3::new(x2, 0.0, z1),
                    Vec3::new(x2, 0.0, z2),
                    Vec3::new(x1, 0.0, z2),
                ]);

                let color = if (row + col) % 2 == 0 {
                    self.primary
                } else {
                    self.secondary
                };
                colors.extend_from_slice(&[color; 4]);

                indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
            }
        }

        Mesh::new(vertices, indices, colors)
    }
}
