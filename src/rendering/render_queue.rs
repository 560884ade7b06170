//! Per-frame triangle queue stored as a structure of arrays.
//!
//! Every scalar of every corner lives in its own contiguous lane, so a pass
//! that only needs, say, depths walks three dense `f32` arrays. Lanes are
//! sized once at construction; a full queue refuses further triangles.

use super::color::Color;
use glam::Vec3;
use thiserror::Error;

/// Returned by [`RenderQueue::try_push`] when `len == capacity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("render queue is full ({capacity} triangles)")]
pub struct QueueFull {
    pub capacity: usize,
}

/// Parallel lanes for one triangle corner.
#[derive(Clone, Debug)]
pub struct CornerLanes {
    pub x: Vec<f32>,
    pub y: Vec<f32>,
    pub z: Vec<f32>,
    pub r: Vec<f32>,
    pub g: Vec<f32>,
    pub b: Vec<f32>,
}

impl CornerLanes {
    fn with_len(len: usize) -> Self {
        Self {
            x: vec![0.0; len],
            y: vec![0.0; len],
            z: vec![0.0; len],
            r: vec![0.0; len],
            g: vec![0.0; len],
            b: vec![0.0; len],
        }
    }

    #[inline]
    fn write(&mut self, idx: usize, position: Vec3, color: Color) {
        self.x[idx] = position.x;
        self.y[idx] = position.y;
        self.z[idx] = position.z;
        self.r[idx] = color.r;
        self.g[idx] = color.g;
        self.b[idx] = color.b;
    }

    #[inline]
    pub fn position(&self, idx: usize) -> Vec3 {
        Vec3::new(self.x[idx], self.y[idx], self.z[idx])
    }

    #[inline]
    pub fn color(&self, idx: usize) -> Color {
        Color::new(self.r[idx], self.g[idx], self.b[idx])
    }
}

/// One triangle read back out of the queue.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct QueuedTriangle {
    pub positions: [Vec3; 3],
    pub colors: [Color; 3],
}

#[derive(Clone, Debug)]
pub struct RenderQueue {
    count: usize,
    capacity: usize,
    /// Lanes for corners 1, 2 and 3.
    pub corners: [CornerLanes; 3],
}

impl RenderQueue {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            count: 0,
            capacity,
            corners: [
                CornerLanes::with_len(capacity),
                CornerLanes::with_len(capacity),
                CornerLanes::with_len(capacity),
            ],
        }
    }

    /// Forget all queued triangles. Lane storage is kept.
    #[inline]
    pub fn clear(&mut self) {
        self.count = 0;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.count == self.capacity
    }

    /// Append a triangle at `len()`.
    pub fn try_push(&mut self, positions: [Vec3; 3], colors: [Color; 3]) -> Result<(), QueueFull> {
        if self.is_full() {
            return Err(QueueFull {
                capacity: self.capacity,
            });
        }

        let idx = self.count;
        for (lanes, (position, color)) in self.corners.iter_mut().zip(positions.into_iter().zip(colors)) {
            lanes.write(idx, position, color);
        }
        self.count += 1;
        Ok(())
    }

    /// # Panics
    /// Panics if `idx >= len()`.
    pub fn triangle(&self, idx: usize) -> QueuedTriangle {
        assert!(idx < self.count, "triangle {idx} out of range ({} queued)", self.count);
        let [c1, c2, c3] = &self.corners;
        QueuedTriangle {
            positions: [c1.position(idx), c2.position(idx), c3.position(idx)],
            colors: [c1.color(idx), c2.color(idx), c3.color(idx)],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = QueuedTriangle> + '_ {
        (0..self.count).map(move |idx| self.triangle(idx))
    }

    /// Depth lanes of the three corners, trimmed to the live entries.
    pub fn depths(&self) -> [&[f32]; 3] {
        let n = self.count;
        let [c1, c2, c3] = &self.corners;
        [&c1.z[..n], &c2.z[..n], &c3.z[..n]]
    }
}
