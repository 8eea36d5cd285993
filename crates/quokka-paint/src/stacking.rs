//! Stacking contexts and their construction from the box tree.
//!
//! [§ 9.9 Layered presentation](https://www.w3.org/TR/CSS2/visuren.html#layers)
//!
//! "An element in CSS 2 may have a stack level, which describes its
//! position within a set of elements sharing the same stacking context."
//!
//! Only the auto layer is modeled here: contexts with an explicit
//! positive or negative stack level do not occur in this pipeline, so a
//! context owns its box, the in-flow blocks whose line content paints at
//! its level, and its child contexts at stack level 0.

use crate::box_tree::{BoxKind, BoxNode};

/// A stacking context in the CSS painting order.
///
/// [CSS 2.1 Appendix E](https://www.w3.org/TR/CSS2/zindex.html)
///
/// The context tree mirrors a subset of the box tree and owns its slice
/// of it outright: building the tree consumes the page box, and every box
/// ends up owned by exactly one context - either as the context's own
/// box, or inside `blocks_and_cells`. No back-pointers are needed for
/// painting.
#[derive(Debug, Clone, PartialEq)]
pub struct StackingContext {
    /// The box that established this context. Its remaining children are
    /// its own line boxes.
    root: BoxNode,
    /// In-flow block and cell descendants, in document order. Their line
    /// content paints at this context's level; their child blocks have
    /// been dispatched into this same list or into child contexts.
    blocks_and_cells: Vec<BoxNode>,
    /// Child stacking contexts at stack level 0, in document order.
    /// Painted after this context's own content.
    zero_z_contexts: Vec<StackingContext>,
}

impl StackingContext {
    /// Build the stacking context tree for a laid-out page box.
    ///
    /// Walks the box tree once, moving every descendant into its place:
    /// line boxes stay attached to their block, context-establishing
    /// blocks become `zero_z_contexts` entries (recursively), and all
    /// other blocks flatten into `blocks_and_cells` in document order.
    #[must_use]
    pub fn from_page(page: BoxNode) -> Self {
        Self::from_box(page)
    }

    fn from_box(mut root: BoxNode) -> Self {
        let mut blocks_and_cells = Vec::new();
        let mut zero_z_contexts = Vec::new();
        let children = std::mem::take(&mut root.children);
        root.children = dispatch(children, &mut blocks_and_cells, &mut zero_z_contexts);
        Self {
            root,
            blocks_and_cells,
            zero_z_contexts,
        }
    }

    /// The box that established this context.
    #[must_use]
    pub const fn root_box(&self) -> &BoxNode {
        &self.root
    }

    /// In-flow block and cell descendants painting at this level.
    #[must_use]
    pub fn blocks_and_cells(&self) -> &[BoxNode] {
        &self.blocks_and_cells
    }

    /// Child contexts of the auto (z-index 0) layer.
    #[must_use]
    pub fn zero_z_contexts(&self) -> &[StackingContext] {
        &self.zero_z_contexts
    }
}

/// Distribute `children` for one context level.
///
/// Returns the children the current box keeps (its line boxes). Blocks
/// are pushed to `blocks_and_cells` parent-first, so document order is
/// preserved; context-establishing boxes recurse into their own context.
fn dispatch(
    children: Vec<BoxNode>,
    blocks_and_cells: &mut Vec<BoxNode>,
    zero_z_contexts: &mut Vec<StackingContext>,
) -> Vec<BoxNode> {
    let mut retained = Vec::new();
    for mut child in children {
        if child.kind == BoxKind::Line {
            retained.push(child);
        } else if child.establishes_stacking_context() {
            zero_z_contexts.push(StackingContext::from_box(child));
        } else {
            let grandchildren = std::mem::take(&mut child.children);
            blocks_and_cells.push(child);
            let index = blocks_and_cells.len() - 1;
            let lines = dispatch(grandchildren, blocks_and_cells, zero_z_contexts);
            blocks_and_cells[index].children = lines;
        }
    }
    retained
}
