/// Scanline Engine - minimal software rendering pipeline
/// Camera transform, perspective projection, near-plane cull,
/// structure-of-arrays render queue and scanline triangle fill.
pub mod camera;
pub mod config;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod perf;
pub mod pipeline;
pub mod rendering;
pub mod scene;

pub use camera::{Camera, CameraAnimation};
pub use config::{ConfigError, EngineConfig};
pub use geometry::{AnimatedVolume, BasisVolume, RotationPlane};
pub use math::{ApproxEq, Axis, Mirror};
pub use perf::{CounterSnapshot, FunctionCounters, FUNCTION_COUNTERS};
pub use pipeline::{FrameClock, FramePipeline, FrameStats, Scene};
pub use rendering::{Color, Framebuffer, Projector, Rasterizer, RenderQueue, Surface, Triangle2};
pub use scene::{Mesh, MeshError, Platform};
