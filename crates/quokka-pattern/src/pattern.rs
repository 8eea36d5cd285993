//! Parsing and re-serialization of expected-pixel patterns.

use quokka_common::Rgba;
use thiserror::Error;

/// The fixed code-to-color table of the pattern language.
///
/// New codes are an explicit, reviewable change to this table - they are
/// never inferred from context. Uppercase codes are opaque, lowercase are
/// the same hue at half opacity.
///
/// | Code | Color |
/// |------|-------|
/// | `_`  | white (the usual page background) |
/// | `z`  | fully transparent |
/// | `R`  | red |
/// | `G`  | lime |
/// | `B`  | blue |
/// | `V`  | blue-violet (#8a2be2) |
/// | `S`  | crimson (#dc143c) |
/// | `r`  | red, alpha 128 |
/// | `g`  | lime, alpha 128 |
/// | `b`  | blue, alpha 128 |
pub const COLOR_TABLE: &[(char, Rgba)] = &[
    ('_', Rgba::WHITE),
    ('z', Rgba::TRANSPARENT),
    ('R', Rgba::RED),
    ('G', Rgba::LIME),
    ('B', Rgba::BLUE),
    ('V', Rgba::new(138, 43, 226, 255)),
    ('S', Rgba::new(220, 20, 60, 255)),
    ('r', Rgba::new(255, 0, 0, 128)),
    ('g', Rgba::new(0, 255, 0, 128)),
    ('b', Rgba::new(0, 0, 255, 128)),
];

/// Errors raised while parsing or re-serializing a pattern.
///
/// All of these are fatal at parse time; a malformed pattern never
/// reaches comparison.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    /// The pattern text contained no non-empty lines.
    #[error("pattern has no pixel rows")]
    Empty,

    /// A row's length differs from the first row's.
    #[error("pattern row {row} is {found} pixels wide, expected {expected}")]
    RaggedRow {
        /// Zero-based row index.
        row: u32,
        /// Width established by the first row.
        expected: u32,
        /// Width of the offending row.
        found: u32,
    },

    /// A character is not in [`COLOR_TABLE`].
    #[error("unknown color code {code:?} at pattern row {row}, column {column}")]
    UnknownCode {
        /// The unrecognized character.
        code: char,
        /// Zero-based row index.
        row: u32,
        /// Zero-based column index.
        column: u32,
    },

    /// A pixel value has no code in [`COLOR_TABLE`] (re-serialization
    /// only).
    #[error("pixel at ({x}, {y}) has no color code: argb {argb:?}")]
    UnmappedPixel {
        /// Pixel column.
        x: u32,
        /// Pixel row.
        y: u32,
        /// The premultiplied ARGB bytes of the unmappable pixel.
        argb: [u8; 4],
    },
}

/// An expected image authored as a character grid.
///
/// Immutable once parsed; the same pattern text always parses to the
/// same byte buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelPattern {
    /// Grid width in pixels.
    width: u32,
    /// Grid height in pixels.
    height: u32,
    /// Expected premultiplied ARGB bytes, row-major.
    data: Vec<u8>,
}

impl PixelPattern {
    /// Parse a pattern from text.
    ///
    /// Surrounding whitespace is stripped, empty lines are skipped, and
    /// each remaining line is trimmed; the first line fixes the width.
    ///
    /// # Errors
    ///
    /// [`PatternError::Empty`] for a blank pattern,
    /// [`PatternError::RaggedRow`] when a row's length differs from the
    /// first row's, and [`PatternError::UnknownCode`] for a character
    /// missing from [`COLOR_TABLE`].
    pub fn parse(text: &str) -> Result<Self, PatternError> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let Some(first) = lines.first() else {
            return Err(PatternError::Empty);
        };

        let width = u32::try_from(first.chars().count()).unwrap_or(u32::MAX);
        let mut data = Vec::with_capacity(lines.len() * width as usize * 4);
        for (row, line) in lines.iter().enumerate() {
            let row = u32::try_from(row).unwrap_or(u32::MAX);
            let found = u32::try_from(line.chars().count()).unwrap_or(u32::MAX);
            if found != width {
                return Err(PatternError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }
            for (column, code) in line.chars().enumerate() {
                let column = u32::try_from(column).unwrap_or(u32::MAX);
                let color = COLOR_TABLE
                    .iter()
                    .find(|(candidate, _)| *candidate == code)
                    .map(|(_, color)| *color)
                    .ok_or(PatternError::UnknownCode { code, row, column })?;
                data.extend_from_slice(&color.to_premul_argb());
            }
        }

        Ok(Self {
            width,
            height: u32::try_from(lines.len()).unwrap_or(u32::MAX),
            data,
        })
    }

    /// Grid width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Expected premultiplied ARGB bytes, row-major.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// Re-serialize the byte grid through [`COLOR_TABLE`].
    ///
    /// Rows are joined with newlines. Together with [`parse`] this
    /// round-trips: `parse(p).to_text()` reproduces `p`'s pixel grid.
    ///
    /// # Errors
    ///
    /// [`PatternError::UnmappedPixel`] when a pixel value has no code.
    ///
    /// [`parse`]: PixelPattern::parse
    pub fn to_text(&self) -> Result<String, PatternError> {
        let mut text = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                let start = (y as usize * self.width as usize + x as usize) * 4;
                let argb = [
                    self.data[start],
                    self.data[start + 1],
                    self.data[start + 2],
                    self.data[start + 3],
                ];
                let code = COLOR_TABLE
                    .iter()
                    .find(|(_, color)| color.to_premul_argb() == argb)
                    .map(|(code, _)| *code)
                    .ok_or(PatternError::UnmappedPixel { x, y, argb })?;
                text.push(code);
            }
            if y + 1 < self.height {
                text.push('\n');
            }
        }
        Ok(text)
    }
}
