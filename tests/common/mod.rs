//! Shared test surfaces.
#![allow(dead_code)]

use glam::Vec2;
use scanline_engine::{Color, Surface};

/// One recorded `draw_hline` call.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Span {
    pub y: i32,
    pub xa: f32,
    pub xb: f32,
    pub color: Color,
    pub alpha: u8,
}

/// Surface stub that records every primitive instead of drawing it.
#[derive(Default, Debug)]
pub struct RecordingSurface {
    pub spans: Vec<Span>,
    pub lines: Vec<(Vec2, Vec2, Color)>,
    pub clears: Vec<Color>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(y, xa, xb)` triples, the shape most assertions want.
    pub fn rows(&self) -> Vec<(i32, f32, f32)> {
        self.spans.iter().map(|s| (s.y, s.xa, s.xb)).collect()
    }
}

impl Surface for RecordingSurface {
    fn draw_hline(&mut self, y: i32, xa: f32, xb: f32, color: Color, alpha: u8) {
        self.spans.push(Span {
            y,
            xa,
            xb,
            color,
            alpha,
        });
    }

    fn draw_line(&mut self, start: Vec2, end: Vec2, color: Color, _alpha: u8) {
        self.lines.push((start, end, color));
    }

    fn clear(&mut self, color: Color) {
        self.clears.push(color);
    }
}
