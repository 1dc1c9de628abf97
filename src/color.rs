//! Color type used by the canvas and framebuffer.
//!
//! Drawing state is specified with floating-point channels in `0.0..=1.0`, the way
//! immediate-mode APIs take it, and stored as 8-bit RGBA.

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::new(255, 0, 0, 255);
    /// Opaque green.
    pub const GREEN: Self = Self::new(0, 255, 0, 255);
    /// Opaque blue.
    pub const BLUE: Self = Self::new(0, 0, 255, 255);
    /// Opaque yellow.
    pub const YELLOW: Self = Self::new(255, 255, 0, 255);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create an opaque color from unit-range channels.
    ///
    /// Channels are clamped to `0.0..=1.0` and rounded to the nearest 8-bit value.
    #[must_use]
    pub fn from_unit(r: f32, g: f32, b: f32) -> Self {
        let to_u8 = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::rgb(to_u8(r), to_u8(g), to_u8(b))
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from array representation.
    #[must_use]
    pub const fn from_array(arr: [u8; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Rec. 709 luminance in `0.0..=1.0`.
    #[must_use]
    pub fn luma(self) -> f32 {
        0.2126 * (f32::from(self.r) / 255.0)
            + 0.7152 * (f32::from(self.g) / 255.0)
            + 0.0722 * (f32::from(self.b) / 255.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_constants() {
        assert_eq!(Rgba::BLACK, Rgba::rgb(0, 0, 0));
        assert_eq!(Rgba::WHITE, Rgba::rgb(255, 255, 255));
        assert_eq!(Rgba::RED.r, 255);
        assert_eq!(Rgba::GREEN.g, 255);
        assert_eq!(Rgba::BLUE.b, 255);
        assert_eq!(Rgba::YELLOW, Rgba::rgb(255, 255, 0));
    }

    #[test]
    fn test_from_unit() {
        assert_eq!(Rgba::from_unit(1.0, 0.0, 0.0), Rgba::RED);
        assert_eq!(Rgba::from_unit(1.0, 1.0, 0.0), Rgba::YELLOW);
        assert_eq!(Rgba::from_unit(0.5, 0.5, 0.5), Rgba::rgb(128, 128, 128));
    }

    #[test]
    fn test_from_unit_clamps() {
        assert_eq!(Rgba::from_unit(2.0, -1.0, 1.5), Rgba::rgb(255, 0, 255));
    }

    #[test]
    fn test_array_roundtrip() {
        let c = Rgba::new(1, 2, 3, 4);
        assert_eq!(Rgba::from_array(c.to_array()), c);
    }

    #[test]
    fn test_luma_extremes() {
        assert!(Rgba::BLACK.luma().abs() < 1e-6);
        assert!((Rgba::WHITE.luma() - 1.0).abs() < 1e-4);
    }
}
