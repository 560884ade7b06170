/// Linear float colour and its mapping to the framebuffer's ARGB format.
use serde::{Deserialize, Serialize};

/// Channels are nominally in `[0, 1]`. Out-of-range values survive until
/// [`Color::to_rgb8`] clamps them.
#[derive(Copy, Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    pub const RED: Color = Color::new(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::new(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0);
    pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0);
    pub const SKY: Color = Color::new(0.53, 0.81, 0.92);
    pub const GRASS: Color = Color::new(0.30, 0.62, 0.25);
    pub const MOSS: Color = Color::new(0.22, 0.48, 0.18);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Scale each channel by 255, clamp to `[0, 255]` and truncate.
    #[inline]
    pub fn to_rgb8(self) -> [u8; 3] {
        [channel_to_u8(self.r), channel_to_u8(self.g), channel_to_u8(self.b)]
    }

    /// Pack as `0xAARRGGBB`.
    #[inline]
    pub fn to_argb(self, alpha: u8) -> u32 {
        let [r, g, b] = self.to_rgb8();
        argb(alpha, r, g, b)
    }
}

#[inline]
fn channel_to_u8(channel: f32) -> u8 {
    (channel * 255.0).clamp(0.0, 255.0) as u8
}

#[inline]
pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_channels_clamp() {
        assert_eq!(Color::new(-0.5, 0.5, 2.0).to_rgb8(), [0, 127, 255]);
    }

    #[test]
    fn packs_opaque_white() {
        assert_eq!(Color::WHITE.to_argb(255), 0xFFFF_FFFF);
        assert_eq!(Color::RED.to_argb(0x80), 0x80FF_0000);
    }
}
