//! Unfilled line drawing for oriented volumes.

use super::color::Color;
use super::projection::Projector;
use super::surface::Surface;
use crate::camera::Camera;
use crate::geometry::{BasisVolume, EDGES};
use glam::Vec3;

/// Transform, project and draw a world-space segment.
///
/// Returns false (and draws nothing) when either endpoint is behind the
/// camera's near plane, since there is no segment clipping.
pub fn draw_line_3d<S: Surface + ?Sized>(
    surface: &mut S,
    camera: &Camera,
    projector: &Projector,
    start: Vec3,
    end: Vec3,
    color: Color,
    alpha: u8,
) -> bool {
    let a = camera.transform(start);
    let b = camera.transform(end);
    if a.z < camera.near_plane || b.z < camera.near_plane {
        return false;
    }
    surface.draw_line(projector.project(a), projector.project(b), color, alpha);
    true
}

/// Draw the twelve edges of `volume`. Returns how many edges were drawn.
pub fn draw_volume<S: Surface + ?Sized>(
    surface: &mut S,
    camera: &Camera,
    projector: &Projector,
    volume: &BasisVolume,
    color: Color,
    alpha: u8,
) -> usize {
    let corners = volume.corners();
    EDGES
        .iter()
        .filter(|&&(a, b)| draw_line_3d(surface, camera, projector, corners[a], corners[b], color, alpha))
        .count()
}
