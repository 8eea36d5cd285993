//! Box-model geometry for laid-out boxes.
//!
//! [CSS Box Model Module Level 3](https://www.w3.org/TR/css-box-3/)
//!
//! Layout has already resolved every edge; this module only derives the
//! nested boxes (content, padding, border, margin) from those values.

use quokka_common::{EdgeSizes, Rect};
use serde::{Deserialize, Serialize};

/// Resolved geometry of one box.
///
/// [§ 3. The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
///
/// "Each box has a content area and optional surrounding padding, border,
/// and margin areas." The content rectangle is positioned in page
/// coordinates; each edge set grows the box outward, all four edges
/// independently. All values are finite with non-negative sizes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoxDimensions {
    /// Content area position and size.
    pub content: Rect,
    /// Padding edge widths.
    #[serde(default)]
    pub padding: EdgeSizes,
    /// Border edge widths.
    #[serde(default)]
    pub border: EdgeSizes,
    /// Margin edge widths.
    #[serde(default)]
    pub margin: EdgeSizes,
}

impl BoxDimensions {
    /// The content box: the innermost rectangle.
    #[must_use]
    pub const fn content_box(&self) -> Rect {
        self.content
    }

    /// The padding box: content grown by the padding edges.
    ///
    /// [§ 3.2 Padding](https://www.w3.org/TR/css-box-3/#paddings)
    #[must_use]
    pub fn padding_box(&self) -> Rect {
        Rect {
            x: self.content.x - self.padding.left,
            y: self.content.y - self.padding.top,
            width: self.content.width + self.padding.left + self.padding.right,
            height: self.content.height + self.padding.top + self.padding.bottom,
        }
    }

    /// The border box: the padding box grown by the border edges.
    ///
    /// [§ 3.3 Borders](https://www.w3.org/TR/css-box-3/#borders)
    #[must_use]
    pub fn border_box(&self) -> Rect {
        let padding = self.padding_box();
        Rect {
            x: padding.x - self.border.left,
            y: padding.y - self.border.top,
            width: padding.width + self.border.left + self.border.right,
            height: padding.height + self.border.top + self.border.bottom,
        }
    }

    /// The margin box: the outermost rectangle, containing all areas.
    ///
    /// [§ 3.1 Margins](https://www.w3.org/TR/css-box-3/#margins)
    #[must_use]
    pub fn margin_box(&self) -> Rect {
        let border = self.border_box();
        Rect {
            x: border.x - self.margin.left,
            y: border.y - self.margin.top,
            width: border.width + self.margin.left + self.margin.right,
            height: border.height + self.margin.top + self.margin.bottom,
        }
    }
}
