//! Painter seams: the two collaborators the compositor delegates to.
//!
//! Inline content (text runs, inline boxes) and background images are
//! painted by external collaborators - glyph rasterization and image
//! decoding live upstream. The compositor only decides *where* and *in
//! what order*; these traits decide *how pixels land*.
//!
//! Software implementations are bundled for pipelines (and tests) that
//! need no more than solid fragments and raster image sampling.

use quokka_common::{Rect, Rgba};
use quokka_raster::{Antialias, GraphicsContext, stacked};

use crate::background::{BackgroundLayer, ImageRendering};
use crate::box_tree::BoxNode;
use crate::error::PaintError;

/// Paints one line box's inline content.
pub trait InlinePainter {
    /// Paint `line`'s inline content.
    ///
    /// `page` is the page box of the stacking context being painted, for
    /// painters that resolve values against the page. With `hinting`,
    /// painters are expected to produce crisp, pixel-aligned output.
    ///
    /// # Errors
    ///
    /// Any error aborts the render.
    fn draw_inline_level(
        &self,
        context: &mut GraphicsContext,
        page: &BoxNode,
        line: &BoxNode,
        hinting: bool,
    ) -> Result<(), PaintError>;
}

/// Paints one background layer's image.
pub trait ImagePainter {
    /// Paint `layer`'s image into its painting area, honoring the
    /// layer's rendering mode. A layer without an image paints nothing.
    ///
    /// The compositor has already clipped the context to the layer's
    /// painting area when this is called.
    ///
    /// # Errors
    ///
    /// Any error aborts the render.
    fn draw_background_image(
        &self,
        context: &mut GraphicsContext,
        layer: &BackgroundLayer,
    ) -> Result<(), PaintError>;
}

/// Inline painter that fills each fragment's bounds with its color.
///
/// This is what a block-glyph test font (every glyph a filled em square)
/// rasterizes to, which makes it the painter of choice for pixel-exact
/// regression fixtures.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolidFragmentPainter;

impl InlinePainter for SolidFragmentPainter {
    fn draw_inline_level(
        &self,
        context: &mut GraphicsContext,
        _page: &BoxNode,
        line: &BoxNode,
        hinting: bool,
    ) -> Result<(), PaintError> {
        let mut context = stacked(context);
        if hinting {
            context.set_antialias(Antialias::None);
        }
        for fragment in &line.fragments {
            context.set_source(fragment.color);
            context.fill_rect(fragment.bounds);
        }
        Ok(())
    }
}

/// Image painter that samples a [`LoadedImage`] into the painting area.
///
/// `Pixelated` and `CrispEdges` layers sample nearest-neighbor; `Auto`
/// layers sample bilinearly.
///
/// [`LoadedImage`]: quokka_common::LoadedImage
#[derive(Debug, Clone, Copy, Default)]
pub struct SamplingImagePainter;

impl ImagePainter for SamplingImagePainter {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    fn draw_background_image(
        &self,
        context: &mut GraphicsContext,
        layer: &BackgroundLayer,
    ) -> Result<(), PaintError> {
        let Some(image) = &layer.image else {
            return Ok(());
        };
        let area = layer.painting_area;
        if area.is_empty() || image.width() == 0 || image.height() == 0 {
            return Ok(());
        }

        let device = Rect::new(0.0, 0.0, context.width() as f32, context.height() as f32)
            .intersect(&area);
        if device.is_empty() {
            return Ok(());
        }
        let x0 = device.x.floor().max(0.0) as u32;
        let y0 = device.y.floor().max(0.0) as u32;
        let x1 = (device.right().ceil() as u32).min(context.width());
        let y1 = (device.bottom().ceil() as u32).min(context.height());

        for y in y0..y1 {
            for x in x0..x1 {
                let (cx, cy) = (x as f32 + 0.5, y as f32 + 0.5);
                if !area.contains(cx, cy) {
                    continue;
                }
                // Normalized position of this pixel center in the area.
                let u = (cx - area.x) / area.width;
                let v = (cy - area.y) / area.height;
                let color = match layer.image_rendering {
                    ImageRendering::CrispEdges | ImageRendering::Pixelated => {
                        sample_nearest(image, u, v)
                    }
                    ImageRendering::Auto => sample_bilinear(image, u, v),
                };
                context.blend_pixel(x, y, color);
            }
        }
        Ok(())
    }
}

/// Nearest-neighbor sample at normalized coordinates.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn sample_nearest(image: &quokka_common::LoadedImage, u: f32, v: f32) -> Rgba {
    let x = (u * image.width() as f32).floor().max(0.0) as u32;
    let y = (v * image.height() as f32).floor().max(0.0) as u32;
    image.pixel(x, y)
}

/// Bilinear sample at normalized coordinates, in straight alpha.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn sample_bilinear(image: &quokka_common::LoadedImage, u: f32, v: f32) -> Rgba {
    let x = (u * image.width() as f32 - 0.5).max(0.0);
    let y = (v * image.height() as f32 - 0.5).max(0.0);
    let (x0, y0) = (x.floor() as u32, y.floor() as u32);
    let (fx, fy) = (x.fract(), y.fract());

    let lerp = |a: u8, b: u8, t: f32| -> f32 { f32::from(a).mul_add(1.0 - t, f32::from(b) * t) };
    let sample = |dx: u32, dy: u32| image.pixel(x0 + dx, y0 + dy);
    let (p00, p10, p01, p11) = (sample(0, 0), sample(1, 0), sample(0, 1), sample(1, 1));

    let channel = |c: fn(Rgba) -> u8| -> u8 {
        let top = lerp(c(p00), c(p10), fx);
        let bottom = lerp(c(p01), c(p11), fx);
        top.mul_add(1.0 - fy, bottom * fy).round().clamp(0.0, 255.0) as u8
    };
    Rgba::new(
        channel(|p| p.r),
        channel(|p| p.g),
        channel(|p| p.b),
        channel(|p| p.a),
    )
}
