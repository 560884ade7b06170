//! One frame of the render loop, end to end.
//!
//! clear -> queue reset -> clip/cull -> project + fill -> volume wireframes.
//! The caller owns the camera and presents the surface afterwards.
//!
//! Everything runs on the calling thread. Splitting `populate` across
//! threads would need either an atomic slot reservation in `RenderQueue`
//! or per-thread queues merged before rasterization.

use crate::camera::Camera;
use crate::count_call;
use crate::geometry::AnimatedVolume;
use crate::perf::{PerfStats, FUNCTION_COUNTERS};
use crate::rendering::{clipper, wireframe, ClipStats, Color, Projector, Rasterizer, RenderQueue, Surface};
use crate::scene::Mesh;
use std::time::{Duration, Instant};

/// Everything drawn each frame. Built once at setup.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub mesh: Mesh,
    pub volumes: Vec<AnimatedVolume>,
}

impl Scene {
    pub fn new(mesh: Mesh) -> Self {
        Self {
            mesh,
            volumes: Vec::new(),
        }
    }

    pub fn with_volume(mut self, volume: AnimatedVolume) -> Self {
        self.volumes.push(volume);
        self
    }

    /// Advance volume animation by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        for volume in &mut self.volumes {
            volume.update(dt);
        }
    }
}

#[derive(Copy, Clone, Debug, Default)]
pub struct FrameStats {
    pub clip: ClipStats,
    pub triangles_drawn: usize,
    pub edges_drawn: usize,
    pub timings: PerfStats,
}

pub struct FramePipeline {
    pub queue: RenderQueue,
    pub rasterizer: Rasterizer,
    pub clear_color: Color,
    pub wire_alpha: u8,
}

impl FramePipeline {
    pub fn new(projector: Projector, queue_capacity: usize) -> Self {
        Self {
            queue: RenderQueue::with_capacity(queue_capacity),
            rasterizer: Rasterizer::new(projector),
            clear_color: Color::SKY,
            wire_alpha: u8::MAX,
        }
    }

    pub fn projector(&self) -> &Projector {
        &self.rasterizer.projector
    }

    /// Re-centre the viewport after a resize.
    pub fn set_projector(&mut self, projector: Projector) {
        self.rasterizer.projector = projector;
    }

    pub fn render_frame<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        camera: &Camera,
        scene: &Scene,
    ) -> FrameStats {
        count_call!(FUNCTION_COUNTERS.frames_rendered);

        let frame_start = Instant::now();
        let mut stats = FrameStats::default();

        let stage = Instant::now();
        surface.clear(self.clear_color);
        stats.timings.clear_us = micros(stage.elapsed());

        let stage = Instant::now();
        self.queue.clear();
        stats.clip = clipper::populate(camera, &scene.mesh, &mut self.queue);
        stats.timings.clip_us = micros(stage.elapsed());

        let stage = Instant::now();
        stats.triangles_drawn = self.rasterizer.render_queue(surface, &self.queue);
        stats.timings.raster_us = micros(stage.elapsed());

        let stage = Instant::now();
        for animated in &scene.volumes {
            stats.edges_drawn += wireframe::draw_volume(
                surface,
                camera,
                &self.rasterizer.projector,
                &animated.volume,
                animated.color,
                self.wire_alpha,
            );
        }
        stats.timings.wireframe_us = micros(stage.elapsed());

        stats.timings.total_us = micros(frame_start.elapsed());
        stats
    }
}

#[inline]
fn micros(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1_000_000.0
}

/// Frames-per-second accumulator for the frontend's status line.
pub struct FrameClock {
    last_frame: Instant,
    window_start: Instant,
    frames: u32,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            last_frame: now,
            window_start: now,
            frames: 0,
        }
    }

    /// Seconds since the previous call.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.frames += 1;
        dt
    }

    /// Frame count of the last full second, once per second.
    pub fn take_fps(&mut self) -> Option<u32> {
        if self.window_start.elapsed() < Duration::from_secs(1) {
            return None;
        }
        let fps = self.frames;
        self.frames = 0;
        self.window_start = Instant::now();
        Some(fps)
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
