pub mod color;
pub mod framebuffer;
/// Software rasterization pipeline
/// camera space -> near-plane cull -> SoA queue -> projection -> scanline fill
pub mod clipper;
pub mod projection;
pub mod rasterizer;
pub mod render_queue;
pub mod surface;
pub mod wireframe;

pub use clipper::{populate, ClipStats};
pub use color::Color;
pub use framebuffer::Framebuffer;
pub use projection::{project, Projector};
pub use rasterizer::{fill_triangle, fill_triangles, lerp_x, Rasterizer, Triangle2};
pub use render_queue::{QueueFull, QueuedTriangle, RenderQueue};
pub use surface::Surface;
