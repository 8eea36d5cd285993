//! The compositing walk: backgrounds, line content, child contexts.
//!
//! [CSS 2.1 Appendix E.2 Painting order](https://www.w3.org/TR/CSS2/zindex.html#painting-order)
//!
//! Everything here paints back to front, so later pixels sit visually
//! above earlier ones. Each routine opens its own [`stacked`] scopes;
//! no clip or antialias change ever outlives the routine that made it.

use quokka_raster::{Antialias, GraphicsContext, Pixels, Surface, stacked};

use crate::background::Background;
use crate::box_tree::{BoxKind, BoxNode};
use crate::error::PaintError;
use crate::painter::{ImagePainter, InlinePainter};
use crate::stacking::StackingContext;

/// Render a laid-out page box to raw pixels.
///
/// Allocates a surface sized to the page's margin box - fractional
/// dimensions are truncated, matching the integral coordinates pixel
/// assertions expect - builds the stacking context tree, paints the page
/// background and the root context, and extracts the pixels.
///
/// With `hinting`, fills land on exact pixel boundaries so output can be
/// compared byte-for-byte.
///
/// # Errors
///
/// Any [`PaintError`] abandons the render; the surface is discarded.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn render_page(
    page: BoxNode,
    hinting: bool,
    inline: &dyn InlinePainter,
    images: &dyn ImagePainter,
) -> Result<Pixels, PaintError> {
    let width = page.margin_width() as u32;
    let height = page.margin_height() as u32;
    let surface = Surface::allocate(width, height)?;
    let mut context = GraphicsContext::new(surface);
    {
        let mut context = stacked(&mut context);
        let stacking = StackingContext::from_page(page);
        draw_background(
            &mut context,
            &stacking.root_box().style.background,
            hinting,
            images,
        )?;
        draw_stacking_context(&mut context, &stacking, stacking.root_box(), hinting, inline)?;
    }
    Ok(context.into_surface().extract())
}

/// Paint one box's background: solid color, then image layers.
///
/// The color fills the painting area of the *last* layer - the
/// bottom-most painted region, which is exactly the area the color shows
/// through. Layers then paint in reverse declared order so the first
/// declared layer ends up visually topmost, each clipped to its own
/// painting area.
///
/// # Errors
///
/// [`PaintError::MissingBackgroundLayer`] when `background.layers` is
/// empty - upstream must provide at least one layer, even a zero-sized
/// one - or any error from the image painter.
pub fn draw_background(
    context: &mut GraphicsContext,
    background: &Background,
    hinting: bool,
    images: &dyn ImagePainter,
) -> Result<(), PaintError> {
    let mut context = stacked(context);
    if hinting {
        // Prefer crisp edges on background rectangles.
        context.set_antialias(Antialias::None);
    }

    let Some(bottom) = background.layers.last() else {
        return Err(PaintError::MissingBackgroundLayer);
    };
    {
        let mut context = stacked(&mut context);
        context.clip_rect(bottom.painting_area);
        context.set_source(background.color);
        context.paint();
    }

    // Paint in reversed order: the first layer is closest to the viewer.
    for layer in background.layers.iter().rev() {
        if layer.image.is_none() {
            continue;
        }
        let mut context = stacked(&mut context);
        context.clip_rect(layer.painting_area);
        images.draw_background_image(&mut context, layer)?;
    }
    Ok(())
}

/// Paint one stacking context: own line content, then child contexts.
///
/// The context's background is painted by the caller (see
/// [`draw_background`]) strictly before this runs. Content is clipped to
/// the rounded padding box when the root box clips - but never the page
/// box, so page-level backgrounds and borders stay intact - and the clip
/// covers content and children only: backgrounds were pre-clipped to
/// their own painting areas and borders are painted by a separate
/// routine.
///
/// # Errors
///
/// Any error from the inline painter or a child context.
pub fn draw_stacking_context(
    context: &mut GraphicsContext,
    stacking: &StackingContext,
    page: &BoxNode,
    hinting: bool,
    inline: &dyn InlinePainter,
) -> Result<(), PaintError> {
    let mut context = stacked(context);
    {
        let mut context = stacked(&mut context);
        let root = stacking.root_box();
        if root.style.overflow.clips() && !root.is_page() {
            context.clip_rounded_rect(root.rounded_padding_box());
        }

        // Appendix E point 7: the in-flow, inline-level descendants.
        for block in std::iter::once(root).chain(stacking.blocks_and_cells()) {
            for child in &block.children {
                if child.kind == BoxKind::Line {
                    inline.draw_inline_level(&mut context, page, child, hinting)?;
                }
            }
        }

        // Appendix E point 8: child contexts at stack level 0.
        for child in stacking.zero_z_contexts() {
            draw_stacking_context(&mut context, child, page, hinting, inline)?;
        }
    }
    Ok(())
}
