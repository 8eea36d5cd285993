//! Background descriptions attached to boxes.
//!
//! [CSS Backgrounds and Borders Module Level 3](https://www.w3.org/TR/css-backgrounds-3/)

use quokka_common::{LoadedImage, Rect, Rgba};
use serde::{Deserialize, Serialize};

/// [§ 6.2 'image-rendering'](https://www.w3.org/TR/css-images-3/#the-image-rendering)
///
/// How a background image is scaled into its painting area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageRendering {
    /// Smooth scaling.
    #[default]
    Auto,
    /// Preserve crisp edges; no smoothing across pixels.
    CrispEdges,
    /// Nearest-neighbor scaling.
    Pixelated,
}

/// One background image layer.
///
/// [§ 3.7 Background painting area](https://www.w3.org/TR/css-backgrounds-3/#background-painting-area)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BackgroundLayer {
    /// The rectangle this layer is painted within.
    pub painting_area: Rect,
    /// The layer's image; a layer without one contributes nothing.
    #[serde(default)]
    pub image: Option<LoadedImage>,
    /// How the image is scaled into the painting area.
    #[serde(default)]
    pub image_rendering: ImageRendering,
}

/// The background of one box: a solid color plus image layers.
///
/// [§ 3.10 Layering multiple background images](https://www.w3.org/TR/css-backgrounds-3/#layering)
///
/// "The background images of an element are drawn with the first
/// specified on top and the others layered behind" - so layers are
/// painted in reverse declared order, and the solid color shows through
/// the painting area of the last (bottom-most) layer.
///
/// The background painter requires at least one layer, even a zero-sized
/// imageless one, to derive the color's painting area from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Background {
    /// The solid background color; may be fully transparent.
    #[serde(default)]
    pub color: Rgba,
    /// Image layers, first declared is visually topmost.
    #[serde(default)]
    pub layers: Vec<BackgroundLayer>,
}

impl Background {
    /// A solid-color background painted across `painting_area`.
    ///
    /// This builds the single imageless layer the painter contract
    /// requires.
    #[must_use]
    pub fn solid(color: Rgba, painting_area: Rect) -> Self {
        Self {
            color,
            layers: vec![BackgroundLayer {
                painting_area,
                image: None,
                image_rendering: ImageRendering::default(),
            }],
        }
    }
}
