/// Main application entry point
/// Handles window creation, the keep-running flag and the render loop
use glam::Vec3;
use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;
use scanline_engine::logging::{init_logging, LoggingConfig};
use scanline_engine::*;
use std::error::Error;
use std::num::NonZeroU32;
use std::sync::Arc;
use winit::{
    event::*,
    event_loop::{ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

fn load_config() -> Result<EngineConfig, ConfigError> {
    match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading config from {path}");
            EngineConfig::load(path)
        }
        None => Ok(EngineConfig::default()),
    }
}

fn build_scene(config: &EngineConfig) -> Result<Scene, MeshError> {
    scanline_engine::perf_scope!("build_scene");
    let mesh = config.platform.build_mesh()?;
    log::info!(
        "Platform: {} triangles, {} vertices",
        mesh.triangle_count(),
        mesh.vertex_count()
    );

    let cube = AnimatedVolume::new(BasisVolume::axis_aligned(Vec3::new(0.0, 10.0, 60.0), 8.0), Color::YELLOW)
        .with_spin(RotationPlane::XZ, 0.9)
        .with_spin(RotationPlane::XY, 0.4);
    let marker = AnimatedVolume::new(BasisVolume::axis_aligned(Vec3::new(-40.0, 6.0, 90.0), 5.0), Color::RED)
        .with_spin(RotationPlane::YZ, 1.3);

    Ok(Scene::new(mesh).with_volume(cube).with_volume(marker))
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging(LoggingConfig::default());

    let config = load_config()?;
    let mut scene = build_scene(&config)?;

    let mut camera = config.camera.build();
    let mut animation = CameraAnimation::new(config.camera.sway, config.camera.position.y);

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(config.window.title.as_str())
            .with_inner_size(winit::dpi::PhysicalSize::new(config.window.width, config.window.height))
            .build(&event_loop)?,
    );

    // Initialize software presentation context
    let context = softbuffer::Context::new(window.clone())?;
    let mut surface = softbuffer::Surface::new(&context, window.clone())?;

    let size = window.inner_size();
    let mut framebuffer = Framebuffer::new(size.width as usize, size.height as usize);

    let mut pipeline = FramePipeline::new(
        Projector::for_viewport(framebuffer.width, framebuffer.height, config.projection.unit_scale),
        config.render.queue_capacity,
    );
    pipeline.clear_color = config.render.clear_color;
    pipeline.wire_alpha = config.render.wire_alpha;

    let frame_budget_us = 1_000_000.0 / config.window.target_fps.max(1) as f64;
    let mut clock = FrameClock::new();

    log::info!(
        "Window {}x{}, queue capacity {}",
        framebuffer.width,
        framebuffer.height,
        pipeline.queue.capacity()
    );

    event_loop.run(move |event, elwt| {
        elwt.set_control_flow(ControlFlow::Poll);

        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::KeyboardInput { event, .. } => {
                    if event.state == ElementState::Pressed
                        && event.physical_key == PhysicalKey::Code(KeyCode::Escape)
                    {
                        elwt.exit();
                    }
                }
                WindowEvent::Resized(new_size) => {
                    framebuffer.resize(new_size.width as usize, new_size.height as usize);
                    pipeline.set_projector(Projector::for_viewport(
                        framebuffer.width,
                        framebuffer.height,
                        config.projection.unit_scale,
                    ));
                }
                WindowEvent::RedrawRequested => {
                    let dt = clock.tick();

                    animation.update(&mut camera, dt);
                    scene.update(dt);

                    let stats = pipeline.render_frame(&mut framebuffer, &camera, &scene);
                    if stats.timings.total_us > frame_budget_us {
                        log::warn!(
                            "Frame time: {:.2}ms (> {:.2}ms)",
                            stats.timings.total_us / 1000.0,
                            frame_budget_us / 1000.0
                        );
                    }
                    stats.timings.log_summary();

                    if let Err(err) = present(&mut surface, &framebuffer) {
                        log::error!("present failed: {err}");
                        elwt.exit();
                        return;
                    }

                    if let Some(fps) = clock.take_fps() {
                        log::info!(
                            "FPS: {} | queued: {} | culled: {} | rejected: {}",
                            fps,
                            stats.clip.queued,
                            stats.clip.culled,
                            stats.clip.rejected
                        );
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                window.request_redraw();
            }
            Event::LoopExiting => {
                FUNCTION_COUNTERS.snapshot().log_report();
            }
            _ => {}
        }
    })?;

    Ok(())
}

/// Copy the framebuffer to the window. Zero-sized windows are skipped.
fn present<D, W>(surface: &mut softbuffer::Surface<D, W>, framebuffer: &Framebuffer) -> Result<(), softbuffer::SoftBufferError>
where
    D: winit::raw_window_handle::HasDisplayHandle,
    W: winit::raw_window_handle::HasWindowHandle,
{
    let (Some(width), Some(height)) = (
        NonZeroU32::new(framebuffer.width as u32),
        NonZeroU32::new(framebuffer.height as u32),
    ) else {
        return Ok(());
    };

    surface.resize(width, height)?;
    let mut buffer = surface.buffer_mut()?;
    // softbuffer wants 0RGB; drop the alpha byte.
    for (dst, &src) in buffer.iter_mut().zip(framebuffer.color_buffer_slice()) {
        *dst = src & 0x00FF_FFFF;
    }
    buffer.present()
}
