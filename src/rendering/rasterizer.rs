/// Software rasterizer using the scanline algorithm.
/// Triangles are split at their middle vertex into a top and a bottom half
/// and each integer row becomes one horizontal span on the surface.
use super::color::Color;
use super::projection::Projector;
use super::render_queue::RenderQueue;
use super::surface::Surface;
use crate::count_call;
use crate::perf::FUNCTION_COUNTERS;
use glam::Vec2;

/// Screen-space triangle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Triangle2 {
    pub v1: Vec2,
    pub v2: Vec2,
    pub v3: Vec2,
}

impl Triangle2 {
    pub const fn new(v1: Vec2, v2: Vec2, v3: Vec2) -> Self {
        Self { v1, v2, v3 }
    }

    /// Vertices ordered by ascending y. Equal-y vertices keep their input order.
    pub fn sorted_by_y(&self) -> [Vec2; 3] {
        let mut vertices = [self.v1, self.v2, self.v3];
        // Stable for ties: only swap on strict less-than.
        if vertices[1].y < vertices[0].y {
            vertices.swap(0, 1);
        }
        if vertices[2].y < vertices[1].y {
            vertices.swap(1, 2);
        }
        if vertices[1].y < vertices[0].y {
            vertices.swap(0, 1);
        }
        vertices
    }
}

/// X coordinate of edge `p -> q` at row `y`.
///
/// A horizontal edge (`p.y == q.y`) has no unique crossing; `p.x` is
/// returned instead of dividing by zero.
#[inline]
pub fn lerp_x(y: f32, p: Vec2, q: Vec2) -> f32 {
    if p.y == q.y {
        return p.x;
    }
    p.x + (q.x - p.x) * (y - p.y) / (q.y - p.y)
}

/// `y` as a row index when it is a whole number representable as `i32`.
#[inline]
fn integer_row(y: f32) -> Option<i32> {
    // i32::MAX as f32 rounds up to 2^31, so the upper bound is exclusive.
    if y.fract() == 0.0 && y >= i32::MIN as f32 && y < i32::MAX as f32 {
        Some(y as i32)
    } else {
        None
    }
}

#[inline]
fn emit_span<S: Surface + ?Sized>(surface: &mut S, y: i32, xa: f32, xb: f32, color: Color, alpha: u8) {
    let (xa, xb) = if xa > xb { (xb, xa) } else { (xa, xb) };
    count_call!(FUNCTION_COUNTERS.spans_emitted);
    surface.draw_hline(y, xa, xb, color, alpha);
}

/// Fill `triangle` with a solid colour, one span per integer row.
///
/// Rows `ceil(y1)..=floor(y2)` interpolate the long edge (1-3) against the
/// upper short edge (1-2); rows `floor(y2)+1..=floor(y3)` use the long edge
/// against the lower short edge (2-3). When the top edge is horizontal the
/// row at `y2` is bounded by edge 2-3 instead, so a flat top still spans
/// both top vertices.
pub fn fill_triangle<S: Surface + ?Sized>(surface: &mut S, triangle: &Triangle2, color: Color, alpha: u8) {
    count_call!(FUNCTION_COUNTERS.triangles_filled);

    let [p1, p2, p3] = triangle.sorted_by_y();

    let (min_row, max_row) = surface.visible_rows().unwrap_or((i32::MIN, i32::MAX));

    // All three on one row: a single span covering the x extent.
    if p1.y == p3.y {
        if let Some(row) = integer_row(p1.y).filter(|row| (min_row..=max_row).contains(row)) {
            let min_x = p1.x.min(p2.x).min(p3.x);
            let max_x = p1.x.max(p2.x).max(p3.x);
            emit_span(surface, row, min_x, max_x, color, alpha);
        }
        return;
    }

    let flat_top = p1.y == p2.y;
    let top_start = p1.y.ceil() as i32;
    let top_end = p2.y.floor() as i32;

    for y in top_start.max(min_row)..=top_end.min(max_row) {
        let yf = y as f32;
        let xa = lerp_x(yf, p1, p3);
        let xb = if flat_top {
            lerp_x(yf, p2, p3)
        } else {
            lerp_x(yf, p1, p2)
        };
        emit_span(surface, y, xa, xb, color, alpha);
    }

    let bottom_start = top_end.saturating_add(1);
    let bottom_end = p3.y.floor() as i32;

    for y in bottom_start.max(min_row)..=bottom_end.min(max_row) {
        let yf = y as f32;
        let xa = lerp_x(yf, p1, p3);
        let xb = lerp_x(yf, p2, p3);
        emit_span(surface, y, xa, xb, color, alpha);
    }
}

pub fn fill_triangles<S: Surface + ?Sized>(surface: &mut S, triangles: &[Triangle2], color: Color, alpha: u8) {
    for triangle in triangles {
        fill_triangle(surface, triangle, color, alpha);
    }
}

/// Projects queued camera-space triangles and fills them.
#[derive(Copy, Clone, Debug)]
pub struct Rasterizer {
    pub projector: Projector,
    pub alpha: u8,
}

impl Rasterizer {
    pub fn new(projector: Projector) -> Self {
        Self {
            projector,
            alpha: u8::MAX,
        }
    }

    /// Project one queued triangle to the screen.
    #[inline]
    pub fn project_triangle(&self, queue: &RenderQueue, idx: usize) -> Triangle2 {
        let [c1, c2, c3] = &queue.corners;
        Triangle2::new(
            self.projector.project(c1.position(idx)),
            self.projector.project(c2.position(idx)),
            self.projector.project(c3.position(idx)),
        )
    }

    /// Fill every queued triangle flat with its first corner's colour.
    /// Returns the number of triangles drawn.
    pub fn render_queue<S: Surface + ?Sized>(&self, surface: &mut S, queue: &RenderQueue) -> usize {
        for idx in 0..queue.len() {
            let triangle = self.project_triangle(queue, idx);
            let color = queue.corners[0].color(idx);
            fill_triangle(surface, &triangle, color, self.alpha);
        }
        queue.len()
    }
}
