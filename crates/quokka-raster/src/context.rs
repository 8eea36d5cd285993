//! The graphics context: the mutable painting cursor over a surface.
//!
//! The context tracks three pieces of state - the clip region, the
//! antialiasing mode, and the source color. Painting routines never
//! mutate that state directly at their own level; they open a [`stacked`]
//! scope, mutate inside it, and rely on the guard to restore the previous
//! state on every exit path, panics included.

use std::ops::{Deref, DerefMut};

use quokka_common::{Rect, Rgba, RoundedRect};

use crate::surface::Surface;

/// Edge rasterization mode for fills.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Antialias {
    /// Soften fractional rectangle edges with area coverage.
    #[default]
    Default,
    /// Crisp edges: every pixel is either fully painted or untouched,
    /// decided by its center. Hinted rendering forces this mode so that
    /// full-opacity fills land on exact pixel boundaries.
    None,
}

/// Mutable graphics state, saved and restored as one unit.
#[derive(Debug, Clone)]
struct GraphicsState {
    /// Active clip shapes; a pixel is paintable iff its center lies in
    /// every shape. Empty means unclipped.
    clip: Vec<RoundedRect>,
    /// Edge rasterization mode.
    antialias: Antialias,
    /// Current paint source.
    source: Rgba,
}

impl Default for GraphicsState {
    fn default() -> Self {
        Self {
            clip: Vec::new(),
            antialias: Antialias::default(),
            source: Rgba::BLACK,
        }
    }
}

/// A painting cursor over a [`Surface`].
///
/// All drawing composites premultiplied source-over. The cursor state is
/// scoped: use [`stacked`] around any clip/antialias/source mutation.
#[derive(Debug)]
pub struct GraphicsContext {
    /// The surface being painted.
    surface: Surface,
    /// Current cursor state.
    state: GraphicsState,
    /// Saved states, innermost scope last.
    saved: Vec<GraphicsState>,
}

impl GraphicsContext {
    /// Create a context painting into `surface`.
    #[must_use]
    pub fn new(surface: Surface) -> Self {
        Self {
            surface,
            state: GraphicsState::default(),
            saved: Vec::new(),
        }
    }

    /// Surface width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.surface.width()
    }

    /// Surface height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.surface.height()
    }

    /// The surface being painted.
    #[must_use]
    pub const fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Give the surface back, discarding the cursor.
    #[must_use]
    pub fn into_surface(self) -> Surface {
        self.surface
    }

    /// Current edge rasterization mode.
    #[must_use]
    pub const fn antialias(&self) -> Antialias {
        self.state.antialias
    }

    /// Set the edge rasterization mode.
    pub fn set_antialias(&mut self, antialias: Antialias) {
        self.state.antialias = antialias;
    }

    /// Current paint source.
    #[must_use]
    pub const fn source(&self) -> Rgba {
        self.state.source
    }

    /// Set the paint source color.
    pub fn set_source(&mut self, source: Rgba) {
        self.state.source = source;
    }

    /// Intersect the clip region with a rectangle.
    pub fn clip_rect(&mut self, rect: Rect) {
        self.state.clip.push(RoundedRect::from_rect(rect));
    }

    /// Intersect the clip region with a rounded rectangle.
    pub fn clip_rounded_rect(&mut self, shape: RoundedRect) {
        self.state.clip.push(shape);
    }

    /// Fill the entire clip region with the source color.
    pub fn paint(&mut self) {
        self.fill(None);
    }

    /// Fill `rect` (intersected with the clip region) with the source
    /// color.
    ///
    /// Under [`Antialias::Default`] fractional rectangle edges blend by
    /// area coverage; under [`Antialias::None`] each pixel is decided by
    /// its center. Clip edges are always decided by pixel centers.
    pub fn fill_rect(&mut self, rect: Rect) {
        self.fill(Some(rect));
    }

    /// Composite one straight-alpha pixel at `(x, y)`, honoring the clip
    /// region.
    ///
    /// This is the per-pixel entry point for image samplers.
    pub fn blend_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        #[allow(clippy::cast_precision_loss)]
        let (cx, cy) = (x as f32 + 0.5, y as f32 + 0.5);
        if !self.state.clip.iter().all(|shape| shape.contains(cx, cy)) {
            return;
        }
        self.surface.blend(x, y, color.to_premul_argb(), 255);
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    fn fill(&mut self, rect: Option<Rect>) {
        let mut bounds = Rect::new(0.0, 0.0, self.width() as f32, self.height() as f32);
        for shape in &self.state.clip {
            bounds = bounds.intersect(&shape.rect);
        }
        if let Some(rect) = rect {
            bounds = bounds.intersect(&rect);
        }
        if bounds.is_empty() {
            return;
        }
        let source = self.state.source.to_premul_argb();
        let x0 = bounds.x.floor().max(0.0) as u32;
        let y0 = bounds.y.floor().max(0.0) as u32;
        let x1 = (bounds.right().ceil() as u32).min(self.width());
        let y1 = (bounds.bottom().ceil() as u32).min(self.height());
        for y in y0..y1 {
            for x in x0..x1 {
                let (cx, cy) = (x as f32 + 0.5, y as f32 + 0.5);
                if !self.state.clip.iter().all(|shape| shape.contains(cx, cy)) {
                    continue;
                }
                let coverage = match (self.state.antialias, rect) {
                    (Antialias::Default, Some(rect)) => pixel_coverage(&rect, x, y),
                    (Antialias::None, Some(rect)) => {
                        if rect.contains(cx, cy) {
                            255
                        } else {
                            0
                        }
                    }
                    (_, None) => 255,
                };
                self.surface.blend(x, y, source, coverage);
            }
        }
    }

    fn save(&mut self) {
        self.saved.push(self.state.clone());
    }

    fn restore(&mut self) {
        if let Some(previous) = self.saved.pop() {
            self.state = previous;
        }
    }
}

/// Open a scoped save of the graphics state.
///
/// The returned guard dereferences to the context; when it goes out of
/// scope - by any path, early return and unwinding included - the state
/// active at the time of the call is restored.
pub fn stacked(context: &mut GraphicsContext) -> Stacked<'_> {
    context.save();
    Stacked { context }
}

/// Guard holding one saved graphics state. See [`stacked`].
#[derive(Debug)]
pub struct Stacked<'a> {
    context: &'a mut GraphicsContext,
}

impl Deref for Stacked<'_> {
    type Target = GraphicsContext;

    fn deref(&self) -> &GraphicsContext {
        self.context
    }
}

impl DerefMut for Stacked<'_> {
    fn deref_mut(&mut self) -> &mut GraphicsContext {
        self.context
    }
}

impl Drop for Stacked<'_> {
    fn drop(&mut self) {
        self.context.restore();
    }
}

/// Area of `rect` covering the unit pixel at `(x, y)`, as 0-255.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn pixel_coverage(rect: &Rect, x: u32, y: u32) -> u8 {
    let (px, py) = (x as f32, y as f32);
    let overlap_x = (rect.right().min(px + 1.0) - rect.x.max(px)).clamp(0.0, 1.0);
    let overlap_y = (rect.bottom().min(py + 1.0) - rect.y.max(py)).clamp(0.0, 1.0);
    (overlap_x * overlap_y * 255.0).round() as u8
}
