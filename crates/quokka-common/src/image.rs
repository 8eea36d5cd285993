//! Decoded image data referenced by background layers.
//!
//! Decoding happens upstream; the paint stage only samples pixels.

use serde::{Deserialize, Serialize};

use crate::color::Rgba;

/// Decoded image data for a loaded raster resource.
///
/// Contains the decoded straight-alpha RGBA pixel data and intrinsic
/// dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadedImage {
    /// Intrinsic width of the image in pixels.
    width: u32,
    /// Intrinsic height of the image in pixels.
    height: u32,
    /// Raw RGBA pixel data (`width * height * 4` bytes).
    rgba_data: Vec<u8>,
}

impl LoadedImage {
    /// Create a `LoadedImage` from decoded RGBA pixel data.
    ///
    /// `rgba_data` must hold `width * height * 4` bytes.
    #[must_use]
    pub fn new(width: u32, height: u32, rgba_data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            rgba_data,
        }
    }

    /// A `width` x `height` image filled with one color.
    ///
    /// Regression fixtures use these as recognizable background layers.
    #[must_use]
    pub fn solid(width: u32, height: u32, color: Rgba) -> Self {
        let pixel = [color.r, color.g, color.b, color.a];
        let count = width as usize * height as usize;
        Self {
            width,
            height,
            rgba_data: pixel.repeat(count),
        }
    }

    /// Intrinsic width of the image in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Intrinsic height of the image in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Raw straight-alpha RGBA pixel data.
    #[must_use]
    pub fn rgba_data(&self) -> &[u8] {
        &self.rgba_data
    }

    /// The color at `(x, y)`, clamped to the image bounds.
    ///
    /// Sampling out of an empty image yields transparent.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        if self.width == 0 || self.height == 0 {
            return Rgba::TRANSPARENT;
        }
        let x = x.min(self.width - 1);
        let y = y.min(self.height - 1);
        let index = (y as usize * self.width as usize + x as usize) * 4;
        match self.rgba_data.get(index..index + 4) {
            Some([r, g, b, a]) => Rgba::new(*r, *g, *b, *a),
            _ => Rgba::TRANSPARENT,
        }
    }
}
