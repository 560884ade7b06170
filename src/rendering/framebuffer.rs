/// Framebuffer for software rendering
/// Stores packed ARGB colour; there is no depth buffer, later writes win.
///
/// Memory layout:
/// - Hot metadata (width, height) stored first for bounds checking
/// - One contiguous row-major `u32` buffer, copied as-is to the window
use super::color::{argb, Color};
use super::surface::Surface;
use crate::count_call;
use crate::perf::FUNCTION_COUNTERS;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::{_mm256_set1_epi32, _mm256_storeu_si256, _mm_set1_epi32, _mm_storeu_si128};
use glam::Vec2;

pub struct Framebuffer {
    // Hot data: used for every bounds check and index calculation
    pub width: usize,
    pub height: usize,
    pub color_buffer: Vec<u32>, // ARGB format
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            color_buffer: vec![0; width * height],
        }
    }

    /// Fill the colour buffer with a packed ARGB value.
    pub fn clear_packed(&mut self, clear_color: u32) {
        count_call!(FUNCTION_COUNTERS.framebuffer_clear_calls);

        #[cfg(target_arch = "x86_64")]
        {
            // Prefer AVX (8 pixels per iteration) when available,
            // otherwise fall back to SSE2 (4 pixels per iteration).
            if std::arch::is_x86_feature_detected!("avx") {
                unsafe {
                    return self.clear_simd_avx(clear_color);
                }
            }
            if std::arch::is_x86_feature_detected!("sse2") {
                unsafe {
                    return self.clear_simd_sse2(clear_color);
                }
            }
        }

        self.color_buffer.fill(clear_color);
    }

    /// SIMD-accelerated clear for x86_64 with SSE2.
    /// Clears 4 pixels per iteration using vector stores.
    #[cfg(target_arch = "x86_64")]
    #[target_feature(enable = "sse2")]
    unsafe fn clear_simd_sse2(&mut self, clear_color: u32) {
        let len = self.color_buffer.len();

        let mut i = 0usize;
        let color_vec = _mm_set1_epi32(clear_color as i32);
        while i + 4 <= len {
            let ptr = self.color_buffer.as_mut_ptr().add(i) as *mut _;
            _mm_storeu_si128(ptr, color_vec);
            i += 4;
        }
        // Tail
        self.color_buffer[i..].fill(clear_color);
    }

    /// SIMD-accelerated clear for x86_64 with AVX.
    /// Clears 8 pixels per iteration using 256-bit vector stores.
    #[cfg(target_arch = "x86_64")]
    #[target_feature(enable = "avx")]
    unsafe fn clear_simd_avx(&mut self, clear_color: u32) {
        let len = self.color_buffer.len();

        let mut i = 0usize;
        let color_vec = _mm256_set1_epi32(clear_color as i32);
        while i + 8 <= len {
            let ptr = self.color_buffer.as_mut_ptr().add(i) as *mut _;
            _mm256_storeu_si256(ptr, color_vec);
            i += 8;
        }
        // Tail
        self.color_buffer[i..].fill(clear_color);
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.color_buffer[y * self.width + x])
    }

    /// Write one pixel, ignoring out-of-bounds coordinates.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32, alpha: u8) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let index = y as usize * self.width + x as usize;
        self.color_buffer[index] = blend(color, self.color_buffer[index], alpha);
    }

    /// Get color buffer as slice
    pub fn color_buffer_slice(&self) -> &[u32] {
        &self.color_buffer
    }

    /// Number of pixels that differ from `background`.
    pub fn count_pixels_not(&self, background: u32) -> usize {
        self.color_buffer.iter().filter(|&&c| c != background).count()
    }

    /// Resize framebuffer
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.color_buffer.resize(width * height, 0);
    }
}

impl Surface for Framebuffer {
    /// Endpoints are rounded to the nearest pixel and clamped to the row.
    fn draw_hline(&mut self, y: i32, xa: f32, xb: f32, color: Color, alpha: u8) {
        if y < 0 || y as usize >= self.height || self.width == 0 {
            return;
        }

        let start = (xa.round() as i64).max(0);
        let end = (xb.round() as i64).min(self.width as i64 - 1);
        if start > end {
            return;
        }

        let packed = color.to_argb(u8::MAX);
        let row = y as usize * self.width;
        let span = &mut self.color_buffer[row + start as usize..=row + end as usize];
        if alpha == u8::MAX {
            span.fill(packed);
        } else {
            for pixel in span {
                *pixel = blend(packed, *pixel, alpha);
            }
        }
    }

    /// Bresenham line; pixels outside the buffer are skipped.
    fn draw_line(&mut self, start: Vec2, end: Vec2, color: Color, alpha: u8) {
        let packed = color.to_argb(u8::MAX);

        let (x0, y0) = (start.x.round() as i32, start.y.round() as i32);
        let (x1, y1) = (end.x.round() as i32, end.y.round() as i32);

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let mut x = x0;
        let mut y = y0;

        loop {
            self.set_pixel(x, y, packed, alpha);

            if x == x1 && y == y1 {
                break;
            }

            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn clear(&mut self, color: Color) {
        self.clear_packed(color.to_argb(u8::MAX));
    }

    fn visible_rows(&self) -> Option<(i32, i32)> {
        Some((0, self.height as i32 - 1))
    }
}

/// Source-over blend of `src` onto `dst` with coverage `alpha`. The
/// result is always opaque.
#[inline]
fn blend(src: u32, dst: u32, alpha: u8) -> u32 {
    if alpha == u8::MAX {
        return src | 0xFF00_0000;
    }
    let a = alpha as u32;
    let channel = |shift: u32| -> u8 {
        let s = (src >> shift) & 0xFF;
        let d = (dst >> shift) & 0xFF;
        ((s * a + d * (255 - a) + 127) / 255) as u8
    };
    argb(0xFF, channel(16), channel(8), channel(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hline_rounds_and_clamps() {
        let mut fb = Framebuffer::new(8, 2);
        fb.clear(Color::BLACK);
        fb.draw_hline(1, -3.0, 2.4, Color::WHITE, 255);

        let white = Color::WHITE.to_argb(255);
        let row: Vec<u32> = fb.color_buffer[8..16].to_vec();
        assert_eq!(&row[..3], &[white; 3]);
        assert!(row[3..].iter().all(|&c| c == Color::BLACK.to_argb(255)));
    }

    #[test]
    fn hline_off_surface_is_ignored() {
        let mut fb = Framebuffer::new(4, 4);
        fb.clear(Color::BLACK);
        fb.draw_hline(-1, 0.0, 3.0, Color::WHITE, 255);
        fb.draw_hline(4, 0.0, 3.0, Color::WHITE, 255);
        fb.draw_hline(0, 5.0, 9.0, Color::WHITE, 255);
        assert_eq!(fb.count_pixels_not(Color::BLACK.to_argb(255)), 0);
    }

    #[test]
    fn half_alpha_blends_toward_source() {
        let mut fb = Framebuffer::new(1, 1);
        fb.clear(Color::BLACK);
        fb.draw_hline(0, 0.0, 0.0, Color::WHITE, 128);
        assert_eq!(fb.pixel(0, 0), Some(0xFF80_8080));
    }

    #[test]
    fn diagonal_line_touches_both_ends() {
        let mut fb = Framebuffer::new(5, 5);
        fb.clear(Color::BLACK);
        fb.draw_line(Vec2::new(0.0, 0.0), Vec2::new(4.0, 4.0), Color::RED, 255);
        let red = Color::RED.to_argb(255);
        for i in 0..5 {
            assert_eq!(fb.pixel(i, i), Some(red));
        }
        assert_eq!(fb.count_pixels_not(Color::BLACK.to_argb(255)), 5);
    }

    #[test]
    fn clear_fills_odd_sized_buffers() {
        let mut fb = Framebuffer::new(7, 3);
        fb.clear(Color::SKY);
        let sky = Color::SKY.to_argb(255);
        assert!(fb.color_buffer.iter().all(|&c| c == sky));
    }
}
