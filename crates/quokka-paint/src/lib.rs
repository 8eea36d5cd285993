//! The painting and compositing stage of the Quokka renderer.
//!
//! [CSS 2.1 Appendix E - Elaborate description of Stacking Contexts](https://www.w3.org/TR/CSS2/zindex.html)
//!
//! This crate consumes a fully laid-out box tree - geometry resolved,
//! styles computed, line content positioned - and produces exact pixel
//! output on a raster surface. It knows nothing about markup, the
//! cascade, or layout; those stages run upstream and hand over a
//! read-only tree.
//!
//! # Architecture
//!
//! ```text
//! Layout -> Box tree -> Stacking contexts -> Compositor -> Pixels
//!                                               |
//!                              inline & image painters (seams)
//! ```
//!
//! Painting order follows CSS 2.1 Appendix E, simplified to the auto
//! (z-index 0) layer: a context paints its background (done by its
//! caller), its own in-flow line content, then its child contexts in
//! document order. Glyph rasterization and background-image drawing stay
//! behind the [`painter`] seams.

/// Background descriptions per [CSS Backgrounds and Borders Level 3](https://www.w3.org/TR/css-backgrounds-3/).
pub mod background;
/// Box-model geometry per [CSS Box Model Module Level 3](https://www.w3.org/TR/css-box-3/).
pub mod box_model;
/// The styled, laid-out box tree consumed by the compositor.
pub mod box_tree;
/// The compositing walk per [CSS 2.1 Appendix E](https://www.w3.org/TR/CSS2/zindex.html).
pub mod draw;
/// Paint-stage error taxonomy.
pub mod error;
/// Painter seams for inline content and background images.
pub mod painter;
/// Stacking context tree per [§ 9.9 Layered presentation](https://www.w3.org/TR/CSS2/visuren.html#layers).
pub mod stacking;

pub use background::{Background, BackgroundLayer, ImageRendering};
pub use box_model::BoxDimensions;
pub use box_tree::{BoxKind, BoxNode, InlineFragment, Overflow, Position, Style};
pub use draw::{draw_background, draw_stacking_context, render_page};
pub use error::PaintError;
pub use painter::{ImagePainter, InlinePainter, SamplingImagePainter, SolidFragmentPainter};
pub use stacking::StackingContext;
