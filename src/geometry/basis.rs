//! Box-like volumes described by a centre and an orthonormal basis.
//!
//! Rotation is applied incrementally to the basis vectors each frame. The
//! basis is never renormalized; accumulated float drift is accepted.

use crate::rendering::Color;
use glam::Vec3;

/// Coordinate plane a rotation acts in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RotationPlane {
    XY,
    YZ,
    XZ,
}

/// Corner index pairs forming the 12 edges of a box, in the order:
/// front ring, back ring, front-to-back connectors.
pub const EDGES: [(usize, usize); 12] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BasisVolume {
    pub center: Vec3,
    pub right: Vec3,   // X-axis direction
    pub up: Vec3,      // Y-axis direction
    pub forward: Vec3, // Z-axis direction
    pub half_extent: f32,
}

impl BasisVolume {
    pub fn axis_aligned(center: Vec3, half_extent: f32) -> Self {
        Self {
            center,
            right: Vec3::X,
            up: Vec3::Y,
            forward: Vec3::Z,
            half_extent,
        }
    }

    /// Rotate all three basis vectors by `angular_rate * dt` radians within `plane`.
    pub fn rotate(&mut self, plane: RotationPlane, angular_rate: f32, dt: f32) {
        let theta = angular_rate * dt;
        let (sin_theta, cos_theta) = theta.sin_cos();

        for axis in [&mut self.right, &mut self.up, &mut self.forward] {
            *axis = rotate_in_plane(*axis, plane, sin_theta, cos_theta);
        }
    }

    /// The eight corners: front face (`+forward`) first, then the back face,
    /// each ring ordered `(+r,+u) (-r,+u) (-r,-u) (+r,-u)`.
    pub fn corners(&self) -> [Vec3; 8] {
        let s = self.half_extent;
        let r = self.right * s;
        let u = self.up * s;
        let f = self.forward * s;

        let offsets = [
            r + u + f,
            -r + u + f,
            -r - u + f,
            r - u + f,
            r + u - f,
            -r + u - f,
            -r - u - f,
            r - u - f,
        ];

        offsets.map(|offset| self.center + offset)
    }
}

#[inline]
fn rotate_in_plane(v: Vec3, plane: RotationPlane, sin_theta: f32, cos_theta: f32) -> Vec3 {
    match plane {
        RotationPlane::XY => Vec3::new(
            v.x * cos_theta - v.y * sin_theta,
            v.x * sin_theta + v.y * cos_theta,
            v.z,
        ),
        RotationPlane::YZ => Vec3::new(
            v.x,
            v.y * cos_theta - v.z * sin_theta,
            v.y * sin_theta + v.z * cos_theta,
        ),
        RotationPlane::XZ => Vec3::new(
            v.x * cos_theta - v.z * sin_theta,
            v.y,
            v.x * sin_theta + v.z * cos_theta,
        ),
    }
}

/// Constant angular velocity in one plane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Spin {
    pub plane: RotationPlane,
    /// Radians per second.
    pub rate: f32,
}

/// A volume plus the spins applied to it every frame, drawn as a wireframe.
#[derive(Clone, Debug)]
pub struct AnimatedVolume {
    pub volume: BasisVolume,
    pub spins: Vec<Spin>,
    pub color: Color,
}

impl AnimatedVolume {
    pub fn new(volume: BasisVolume, color: Color) -> Self {
        Self {
            volume,
            spins: Vec::new(),
            color,
        }
    }

    pub fn with_spin(mut self, plane: RotationPlane, rate: f32) -> Self {
        self.spins.push(Spin { plane, rate });
        self
    }

    /// Apply each spin in insertion order.
    pub fn update(&mut self, dt: f32) {
        for spin in &self.spins {
            self.volume.rotate(spin.plane, spin.rate, dt);
        }
    }
}
