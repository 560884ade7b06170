/// Camera with pitch/yaw orientation and a caller-driven animation step.
/// No roll is modeled.
use crate::rendering::Projector;
use glam::Vec3;
use std::f32::consts::PI;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub pitch: f32, // Rotation around X axis (radians)
    pub yaw: f32,   // Rotation around Y axis (radians)
    pub fov: f32,
    /// Camera-space z below which geometry counts as behind the viewer.
    pub near_plane: f32,
}

impl Camera {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            pitch: 0.0,
            yaw: 0.0,
            fov: PI / 3.0,
            near_plane: 0.1,
        }
    }

    /// Express a world-space point in camera-local coordinates.
    ///
    /// The point is translated by `-position`, rotated about X by `pitch`,
    /// then about Y by `yaw`. The order is fixed; swapping it changes the
    /// image.
    #[inline]
    pub fn transform(&self, point: Vec3) -> Vec3 {
        let relative = point - self.position;

        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        let y_rotated = relative.y * cos_pitch - relative.z * sin_pitch;
        let z_rotated = relative.y * sin_pitch + relative.z * cos_pitch;

        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let x_final = relative.x * cos_yaw + z_rotated * sin_yaw;
        let z_final = -relative.x * sin_yaw + z_rotated * cos_yaw;

        Vec3::new(x_final, y_rotated, z_final)
    }

    /// Screen row of the horizon for a viewport `screen_height` pixels tall
    /// whose unit scale equals half its height.
    #[inline]
    pub fn horizon(&self, screen_height: f32) -> f32 {
        (screen_height / 2.0) * (1.0 + self.pitch.tan())
    }

    /// Screen row where the view direction's vanishing point lands under
    /// `projector`. Equal to [`Camera::horizon`] when scale and origin are
    /// both half the screen height.
    #[inline]
    pub fn horizon_row(&self, projector: &Projector) -> f32 {
        projector.origin.y + projector.scale.y * self.pitch.tan()
    }
}

/// Free-running sway of the camera over the scene.
///
/// Owns its own time accumulator; the frame loop threads `dt` in through
/// [`CameraAnimation::update`].
#[derive(Copy, Clone, Debug)]
pub struct CameraAnimation {
    pub elapsed: f32,
    /// Accumulator wraps back to zero once it reaches this value.
    pub period: f32,
    /// Sway amplitude; x drives lateral motion, y vertical bobbing.
    pub amplitude: Vec3,
    pub base_height: f32,
}

impl CameraAnimation {
    pub fn new(amplitude: Vec3, base_height: f32) -> Self {
        Self {
            elapsed: 0.0,
            period: 720.0,
            amplitude,
            base_height,
        }
    }

    /// Advance the accumulator by `dt` and reposition `camera`.
    pub fn update(&mut self, camera: &mut Camera, dt: f32) {
        let phase = PI / 360.0 * self.elapsed;
        camera.position.x = self.amplitude.x * phase.sin();
        camera.position.y = self.base_height + 0.1 * self.amplitude.y * phase.cos();

        self.elapsed += dt;
        if self.elapsed >= self.period {
            self.elapsed = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn identity_camera_leaves_point_unchanged() {
        let camera = Camera::new(Vec3::ZERO);
        let p = Vec3::new(2.0, 4.0, 8.0);
        assert_eq!(camera.transform(p), p);
    }

    #[test]
    fn translation_happens_before_rotation() {
        let mut camera = Camera::new(Vec3::new(0.0, 0.0, -5.0));
        camera.yaw = std::f32::consts::FRAC_PI_2;
        // Relative point is (0, 0, 5); yaw of 90 degrees moves z into x.
        let out = camera.transform(Vec3::ZERO);
        assert_relative_eq!(out.x, 5.0, epsilon = 1e-5);
        assert_relative_eq!(out.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(out.z, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn pitch_then_yaw_is_not_commutative() {
        let mut camera = Camera::new(Vec3::ZERO);
        camera.pitch = 0.5;
        camera.yaw = 0.7;
        let p = Vec3::new(1.0, 2.0, 3.0);
        let out = camera.transform(p);

        // Yaw first, then pitch, written out by hand.
        let (sy, cy) = 0.7f32.sin_cos();
        let (sp, cp) = 0.5f32.sin_cos();
        let x1 = p.x * cy + p.z * sy;
        let z1 = -p.x * sy + p.z * cy;
        let swapped = Vec3::new(x1, p.y * cp - z1 * sp, p.y * sp + z1 * cp);

        assert!((out - swapped).length() > 1e-3);
    }

    #[test]
    fn level_camera_horizon_is_screen_centre() {
        let camera = Camera::new(Vec3::ZERO);
        assert_relative_eq!(camera.horizon(720.0), 360.0);
    }

    #[test]
    fn horizon_row_generalizes_horizon() {
        let mut camera = Camera::new(Vec3::ZERO);
        camera.pitch = -0.3;
        let projector = Projector::new(glam::Vec2::splat(240.0), glam::Vec2::new(320.0, 240.0));
        assert_relative_eq!(camera.horizon_row(&projector), camera.horizon(480.0), epsilon = 1e-3);

        // A distant point at eye level lands on that row.
        let projected = projector.project(camera.transform(Vec3::new(0.0, 0.0, 1.0e4)));
        assert_relative_eq!(projected.y, camera.horizon_row(&projector), epsilon = 1e-2);
    }

    #[test]
    fn animation_wraps_accumulator() {
        let mut camera = Camera::new(Vec3::ZERO);
        let mut anim = CameraAnimation::new(Vec3::splat(90.0), 20.0);
        anim.elapsed = 719.99;
        anim.update(&mut camera, 0.016);
        assert_eq!(anim.elapsed, 0.0);

        anim.update(&mut camera, 0.016);
        assert_relative_eq!(camera.position.x, 0.0);
        assert_relative_eq!(camera.position.y, 29.0);
    }
}
