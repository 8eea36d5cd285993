//! The styled, laid-out box tree handed over by the layout stage.
//!
//! Everything here is input: geometry is final, styles are resolved, line
//! content is positioned. The compositor reads the tree; it never mutates
//! it. Parents exclusively own their children and the tree is acyclic.

use quokka_common::{CornerRadii, Rect, Rgba, RoundedRect};
use serde::{Deserialize, Serialize};

use crate::background::Background;
use crate::box_model::BoxDimensions;

/// Static classification of a box.
///
/// The painting stage only distinguishes the page box (never clipped by
/// its own overflow), ordinary block-level boxes, and line boxes (opaque
/// carriers of inline content).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoxKind {
    /// The document root page box.
    Page,
    /// A block-level box.
    Block,
    /// One line of inline content inside a block.
    Line,
}

/// [§ 11.1.1 Overflow](https://www.w3.org/TR/CSS2/visufx.html#overflow)
///
/// Resolved `overflow` value of a box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Overflow {
    /// Content is not clipped.
    #[default]
    Visible,
    /// Content is clipped to the padding box.
    Hidden,
    /// Clipped, with a scrolling mechanism.
    Scroll,
    /// Clipped at the user agent's discretion.
    Auto,
}

impl Overflow {
    /// Whether this overflow value clips the box's content.
    #[must_use]
    pub fn clips(self) -> bool {
        self != Self::Visible
    }
}

/// [§ 9.3.1 Choosing a positioning scheme](https://www.w3.org/TR/CSS2/visuren.html#choose-position)
///
/// Resolved `position` value of a box. Non-static boxes join the auto
/// (z-index 0) stacking layer; explicit z-index layers are not modeled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    /// Normal flow.
    #[default]
    Static,
    /// Normal flow, offset afterwards.
    Relative,
    /// Out of flow, positioned against the containing block.
    Absolute,
}

/// The slice of computed style the paint stage reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Style {
    /// Overflow handling for this box's content.
    #[serde(default)]
    pub overflow: Overflow,
    /// Positioning scheme.
    #[serde(default)]
    pub position: Position,
    /// Background color and image layers.
    #[serde(default)]
    pub background: Background,
    /// Corner radii of the box, already resolved against its size.
    #[serde(default)]
    pub radii: CornerRadii,
}

/// One positioned fragment of a line's inline content.
///
/// The compositor never looks inside; fragments exist for inline-content
/// painters. The bundled [`SolidFragmentPainter`] fills each fragment's
/// bounds with its color, which is exactly what a block-glyph test font
/// produces.
///
/// [`SolidFragmentPainter`]: crate::painter::SolidFragmentPainter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineFragment {
    /// Fragment rectangle in page coordinates.
    pub bounds: Rect,
    /// Resolved foreground color.
    pub color: Rgba,
}

/// A node of the laid-out box tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxNode {
    /// Static classification.
    pub kind: BoxKind,
    /// Resolved box-model geometry.
    #[serde(default)]
    pub dimensions: BoxDimensions,
    /// The slice of computed style relevant to painting.
    #[serde(default)]
    pub style: Style,
    /// Child boxes, in document order.
    #[serde(default)]
    pub children: Vec<BoxNode>,
    /// Inline content fragments; only meaningful on [`BoxKind::Line`].
    #[serde(default)]
    pub fragments: Vec<InlineFragment>,
}

impl BoxNode {
    /// Create the page box with its dimensions and background.
    #[must_use]
    pub fn page(dimensions: BoxDimensions, background: Background) -> Self {
        Self {
            kind: BoxKind::Page,
            dimensions,
            style: Style {
                background,
                ..Style::default()
            },
            children: Vec::new(),
            fragments: Vec::new(),
        }
    }

    /// Create a block-level box with default style.
    #[must_use]
    pub fn block(dimensions: BoxDimensions) -> Self {
        Self {
            kind: BoxKind::Block,
            dimensions,
            style: Style::default(),
            children: Vec::new(),
            fragments: Vec::new(),
        }
    }

    /// Create a line box carrying inline fragments.
    #[must_use]
    pub fn line(fragments: Vec<InlineFragment>) -> Self {
        Self {
            kind: BoxKind::Line,
            dimensions: BoxDimensions::default(),
            style: Style::default(),
            children: Vec::new(),
            fragments,
        }
    }

    /// Whether this is the page box.
    #[must_use]
    pub fn is_page(&self) -> bool {
        self.kind == BoxKind::Page
    }

    /// Width of the margin box.
    #[must_use]
    pub fn margin_width(&self) -> f32 {
        self.dimensions.margin_box().width
    }

    /// Height of the margin box.
    #[must_use]
    pub fn margin_height(&self) -> f32 {
        self.dimensions.margin_box().height
    }

    /// The padding box shaped by this box's corner radii.
    ///
    /// This is the clip shape used for overflow clipping: content is cut
    /// at the padding edge, never at the border (borders are painted by a
    /// separate routine and must stay intact).
    #[must_use]
    pub fn rounded_padding_box(&self) -> RoundedRect {
        RoundedRect {
            rect: self.dimensions.padding_box(),
            radii: self.style.radii,
        }
    }

    /// Whether this box roots its own auto-layer stacking context.
    ///
    /// The page box is the root context itself. Beyond it, a box needs
    /// its own context when it is positioned, or when it clips its
    /// content - clipping is applied per context root during the
    /// compositing walk, so a clipping box must root the subtree it
    /// clips.
    #[must_use]
    pub fn establishes_stacking_context(&self) -> bool {
        match self.kind {
            BoxKind::Page | BoxKind::Line => false,
            BoxKind::Block => {
                self.style.position != Position::Static || self.style.overflow.clips()
            }
        }
    }
}
