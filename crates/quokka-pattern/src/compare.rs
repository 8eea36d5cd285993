//! Exact comparison of rendered pixels against an expected pattern.

use quokka_raster::Pixels;
use thiserror::Error;

use crate::pattern::PixelPattern;

/// A failed comparison.
///
/// Either failure is fatal to the test case; there is no tolerance and no
/// partial-result reporting.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompareError {
    /// The rendered buffer's declared dimensions differ from the
    /// pattern's. Reported before any pixel byte is inspected.
    #[error(
        "{name}: expected a {expected_width}x{expected_height} image, \
         rendered {actual_width}x{actual_height}"
    )]
    DimensionMismatch {
        /// Test case name.
        name: String,
        /// Pattern width.
        expected_width: u32,
        /// Pattern height.
        expected_height: u32,
        /// Rendered width.
        actual_width: u32,
        /// Rendered height.
        actual_height: u32,
    },

    /// At least one byte differs; the first differing pixel is reported.
    #[error(
        "{name}: pixel mismatch at ({x}, {y}): expected argb {expected:?}, \
         rendered {actual:?}"
    )]
    PixelMismatch {
        /// Test case name.
        name: String,
        /// Column of the first differing pixel.
        x: u32,
        /// Row of the first differing pixel.
        y: u32,
        /// Expected premultiplied ARGB channel values.
        expected: [u8; 4],
        /// Rendered premultiplied ARGB channel values.
        actual: [u8; 4],
    },
}

/// Compare rendered pixels against an expected pattern, byte for byte.
///
/// Dimensions are checked first and fail fast, without touching pixel
/// bytes. `name` identifies the test case in diagnostics.
///
/// # Errors
///
/// [`CompareError::DimensionMismatch`] or [`CompareError::PixelMismatch`].
pub fn assert_pixels(
    name: &str,
    expected: &PixelPattern,
    actual: &Pixels,
) -> Result<(), CompareError> {
    if expected.width() != actual.width() || expected.height() != actual.height() {
        return Err(CompareError::DimensionMismatch {
            name: name.to_owned(),
            expected_width: expected.width(),
            expected_height: expected.height(),
            actual_width: actual.width(),
            actual_height: actual.height(),
        });
    }

    let expected_bytes = expected.bytes();
    let actual_bytes = actual.bytes();
    for (pixel, (want, got)) in expected_bytes
        .chunks_exact(4)
        .zip(actual_bytes.chunks_exact(4))
        .enumerate()
    {
        if want != got {
            let pixel = u32::try_from(pixel).unwrap_or(u32::MAX);
            return Err(CompareError::PixelMismatch {
                name: name.to_owned(),
                x: pixel % expected.width(),
                y: pixel / expected.width(),
                expected: [want[0], want[1], want[2], want[3]],
                actual: [got[0], got[1], got[2], got[3]],
            });
        }
    }
    Ok(())
}
