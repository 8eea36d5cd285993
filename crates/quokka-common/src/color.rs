//! sRGB colors with straight and premultiplied representations.
//!
//! [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)
//!
//! Styles carry straight-alpha RGBA. The raster surface stores
//! premultiplied ARGB, so the conversions here are written to round-trip
//! exactly for every color in the regression color table.

use serde::{Deserialize, Serialize};

/// sRGB color represented as straight (non-premultiplied) RGBA components.
///
/// The default color is fully transparent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    /// "the red color channel" (0-255)
    pub r: u8,
    /// "the green color channel" (0-255)
    pub g: u8,
    /// "the blue color channel" (0-255)
    pub b: u8,
    /// "the alpha channel" (0-255, 255 = fully opaque)
    pub a: u8,
}

impl Rgba {
    /// Fully transparent.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Opaque black (#000000).
    pub const BLACK: Self = Self::new(0, 0, 0, 255);

    /// Opaque white (#ffffff).
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    /// Opaque red (#ff0000).
    pub const RED: Self = Self::new(255, 0, 0, 255);

    /// Opaque lime (#00ff00).
    pub const LIME: Self = Self::new(0, 255, 0, 255);

    /// Opaque blue (#0000ff).
    pub const BLUE: Self = Self::new(0, 0, 255, 255);

    /// Create a color from its channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to premultiplied ARGB bytes, `[a, r*a, g*a, b*a]`.
    ///
    /// Channel scaling rounds to nearest so that `from_premul_argb`
    /// recovers the original channel for every representable color.
    #[must_use]
    pub const fn to_premul_argb(self) -> [u8; 4] {
        [
            self.a,
            premultiply(self.r, self.a),
            premultiply(self.g, self.a),
            premultiply(self.b, self.a),
        ]
    }

    /// Recover a straight-alpha color from premultiplied ARGB bytes.
    ///
    /// A zero alpha maps to [`Rgba::TRANSPARENT`] regardless of the color
    /// bytes, since premultiplication has destroyed them.
    #[must_use]
    pub const fn from_premul_argb(argb: [u8; 4]) -> Self {
        let [a, r, g, b] = argb;
        if a == 0 {
            return Self::TRANSPARENT;
        }
        Self {
            r: unpremultiply(r, a),
            g: unpremultiply(g, a),
            b: unpremultiply(b, a),
            a,
        }
    }
}

/// Scale a channel by alpha, rounding to nearest.
#[allow(clippy::cast_possible_truncation)]
const fn premultiply(channel: u8, alpha: u8) -> u8 {
    ((channel as u32 * alpha as u32 + 127) / 255) as u8
}

/// Divide a premultiplied channel by alpha, rounding to nearest.
///
/// `alpha` must be non-zero.
#[allow(clippy::cast_possible_truncation)]
const fn unpremultiply(channel: u8, alpha: u8) -> u8 {
    let scaled = channel as u32 * 255 + (alpha as u32 / 2);
    let value = scaled / alpha as u32;
    if value > 255 { 255 } else { value as u8 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opaque_premultiply_is_identity() {
        assert_eq!(Rgba::RED.to_premul_argb(), [255, 255, 0, 0]);
        assert_eq!(Rgba::WHITE.to_premul_argb(), [255, 255, 255, 255]);
    }

    #[test]
    fn test_half_alpha_round_trips() {
        let half_red = Rgba::new(255, 0, 0, 128);
        let premul = half_red.to_premul_argb();
        assert_eq!(premul, [128, 128, 0, 0]);
        assert_eq!(Rgba::from_premul_argb(premul), half_red);
    }

    #[test]
    fn test_zero_alpha_collapses_to_transparent() {
        assert_eq!(Rgba::from_premul_argb([0, 7, 9, 11]), Rgba::TRANSPARENT);
    }
}
