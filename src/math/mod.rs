/// Scalar and vector helpers layered on top of glam.
/// Addition and scaling are glam's own `+` and `* k`; this module adds the
/// tolerance comparison and single-axis mirroring the pipeline relies on.
use glam::{Vec2, Vec3};

/// Coordinate axis selector for [`Mirror::mirror`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

/// Absolute value of a scalar.
#[inline]
pub fn scalar_abs(value: f32) -> f32 {
    value.abs()
}

/// True when `lhs` and `rhs` differ by strictly less than `epsilon`.
///
/// # Panics
/// Panics if `epsilon <= 0`; a non-positive tolerance is a caller bug.
#[inline]
pub fn scalar_equals(lhs: f32, rhs: f32, epsilon: f32) -> bool {
    assert!(epsilon > 0.0, "epsilon must be positive, got {epsilon}");
    scalar_abs(lhs - rhs) < epsilon
}

/// Component-wise tolerance comparison.
pub trait ApproxEq {
    /// True iff every component differs by strictly less than `epsilon`.
    fn approx_eq(self, other: Self, epsilon: f32) -> bool;
}

impl ApproxEq for Vec2 {
    #[inline]
    fn approx_eq(self, other: Self, epsilon: f32) -> bool {
        scalar_equals(self.x, other.x, epsilon) && scalar_equals(self.y, other.y, epsilon)
    }
}

impl ApproxEq for Vec3 {
    #[inline]
    fn approx_eq(self, other: Self, epsilon: f32) -> bool {
        scalar_equals(self.x, other.x, epsilon)
            && scalar_equals(self.y, other.y, epsilon)
            && scalar_equals(self.z, other.z, epsilon)
    }
}

/// Negate exactly one component.
pub trait Mirror {
    fn mirror(self, axis: Axis) -> Self;
}

impl Mirror for Vec2 {
    /// `Axis::Z` has no component in the plane and leaves the vector untouched.
    #[inline]
    fn mirror(self, axis: Axis) -> Self {
        match axis {
            Axis::X => Vec2::new(-self.x, self.y),
            Axis::Y => Vec2::new(self.x, -self.y),
            Axis::Z => self,
        }
    }
}

impl Mirror for Vec3 {
    #[inline]
    fn mirror(self, axis: Axis) -> Self {
        match axis {
            Axis::X => Vec3::new(-self.x, self.y, self.z),
            Axis::Y => Vec3::new(self.x, -self.y, self.z),
            Axis::Z => Vec3::new(self.x, self.y, -self.z),
        }
    }
}
