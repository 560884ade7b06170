//! Perspective projection from camera space onto the viewport.

use glam::{Vec2, Vec3};

/// Project a camera-space point to screen coordinates.
///
/// `scale` converts camera units to pixels and `origin` is the pixel the
/// optical axis lands on. Screen y grows downward, so camera y is flipped.
///
/// # Panics
/// Panics if `point.z == 0`; the near-plane cull is expected to keep such
/// points away from here.
#[inline]
pub fn project(point: Vec3, scale: Vec2, origin: Vec2) -> Vec2 {
    assert!(point.z != 0.0, "perspective divide by zero depth at {point}");
    Vec2::new(
        (point.x * scale.x) / point.z + origin.x,
        (-point.y * scale.y) / point.z + origin.y,
    )
}

/// Cached viewport mapping.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Projector {
    pub scale: Vec2,
    pub origin: Vec2,
}

impl Projector {
    pub fn new(scale: Vec2, origin: Vec2) -> Self {
        Self { scale, origin }
    }

    /// Origin at the viewport centre, the same scale on both axes.
    pub fn for_viewport(width: usize, height: usize, unit_scale: f32) -> Self {
        Self {
            scale: Vec2::splat(unit_scale),
            origin: Vec2::new(width as f32 / 2.0, height as f32 / 2.0),
        }
    }

    #[inline]
    pub fn project(&self, point: Vec3) -> Vec2 {
        project(point, self.scale, self.origin)
    }
}
