//! The pixel-pattern mini-language and exact-match comparator.
//!
//! Expected render output is authored as a block of text: each non-empty
//! line is one pixel row, each character one pixel, looked up in a fixed
//! color table. A pattern like
//!
//! ```text
//! _________
//! _RRRR____
//! _RRRR____
//! _________
//! ```
//!
//! parses to a premultiplied-ARGB byte buffer that is compared
//! byte-for-byte against extracted surface pixels. There is no tolerance
//! and no perceptual diffing: a single differing byte fails the case,
//! with the first differing pixel reported by position and channel
//! values.
//!
//! See [`COLOR_TABLE`] for the recognized codes.

pub mod compare;
pub mod pattern;

pub use compare::{CompareError, assert_pixels};
pub use pattern::{COLOR_TABLE, PatternError, PixelPattern};
