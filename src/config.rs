/// Engine configuration loaded from TOML
/// Every section falls back to the demo scene defaults when omitted
use crate::camera::Camera;
use crate::rendering::{Color, Projector};
use crate::scene::Platform;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Frame time above `1 / target_fps` is logged as a warning.
    pub target_fps: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Scanline Engine".to_string(),
            width: 16 * 90,
            height: 9 * 90,
            target_fps: 60,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Pixels per camera-space unit at depth 1.
    pub unit_scale: f32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self { unit_scale: 90.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: Vec3,
    pub pitch: f32,
    pub yaw: f32,
    pub fov: f32,
    pub near_plane: f32,
    /// Lateral/vertical sway of the demo animation; zero disables it.
    pub sway: Vec3,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 20.0, 0.0),
            pitch: -0.8,
            yaw: 0.0,
            fov: PI / 3.0,
            near_plane: 0.1,
            sway: Vec3::splat(90.0),
        }
    }
}

impl CameraConfig {
    pub fn build(&self) -> Camera {
        Camera {
            position: self.position,
            pitch: self.pitch,
            yaw: self.yaw,
            fov: self.fov,
            near_plane: self.near_plane,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Maximum triangles queued per frame.
    pub queue_capacity: usize,
    pub clear_color: Color,
    pub wire_alpha: u8,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            queue_capacity: 4096,
            clear_color: Color::SKY,
            wire_alpha: 255,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub window: WindowConfig,
    pub projection: ProjectionConfig,
    pub camera: CameraConfig,
    pub platform: Platform,
    pub render: RenderConfig,
}

impl EngineConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        if self.render.queue_capacity == 0 {
            return Err(ConfigError::Invalid("render.queue_capacity must be at least 1".into()));
        }
        if !(self.camera.near_plane > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "camera.near_plane must be positive, got {}",
                self.camera.near_plane
            )));
        }
        if self.platform.tiles == 0 {
            return Err(ConfigError::Invalid("platform.tiles must be at least 1".into()));
        }
        Ok(())
    }

    pub fn projector(&self) -> Projector {
        Projector::for_viewport(
            self.window.width as usize,
            self.window.height as usize,
            self.projection.unit_scale,
        )
    }
}
