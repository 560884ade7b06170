/// Drawing primitives the pipeline hands its output to.
use super::color::Color;
use glam::Vec2;

/// Abstraction over a render target that accepts spans and lines.
///
/// The rasterizer only ever emits horizontal spans; wireframes use lines.
/// Pixel snapping is the implementor's choice.
pub trait Surface {
    /// Fill row `y` from `xa` to `xb` inclusive. Callers pass `xa <= xb`.
    fn draw_hline(&mut self, y: i32, xa: f32, xb: f32, color: Color, alpha: u8);

    /// Draw a line segment between two screen points.
    fn draw_line(&mut self, start: Vec2, end: Vec2, color: Color, alpha: u8);

    /// Fill the whole surface with `color`.
    fn clear(&mut self, color: Color);

    /// Rows that can receive pixels. Rows outside are skipped by the
    /// rasterizer before any interpolation. `None` means unbounded.
    fn visible_rows(&self) -> Option<(i32, i32)> {
        None
    }

    /// Each point is drawn as a zero-length line, one pixel on a framebuffer.
    fn draw_points(&mut self, points: &[Vec2], color: Color, alpha: u8) {
        for &point in points {
            self.draw_line(point, point, color, alpha);
        }
    }
}
