//! PNG snapshots of rendered pixels.
//!
//! The automated comparator never reads these; they exist so a human can
//! look at what a failing (or passing) case actually produced. Artifacts
//! are named by test identifier plus a version or build tag, so output
//! from different toolchains can sit side by side.

use std::fs;
use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::error::RasterError;
use crate::surface::Pixels;

/// Write `pixels` as `<name>-<tag>.png` under `dir`.
///
/// The premultiplied surface bytes are converted back to straight alpha
/// for encoding. Returns the path of the written file.
///
/// # Errors
///
/// Returns [`RasterError::ArtifactDir`] if `dir` cannot be created, or
/// [`RasterError::Artifact`] if encoding fails.
pub fn write_png(
    dir: &Path,
    name: &str,
    tag: &str,
    pixels: &Pixels,
) -> Result<PathBuf, RasterError> {
    write_png_scaled(dir, name, tag, pixels, 1)
}

/// Write `pixels` as `<name>-<tag>.png` under `dir`, upscaled by an
/// integer factor with nearest-neighbor sampling.
///
/// Regression pages are a handful of pixels across; a x20 or x30 preview
/// is what a human actually inspects. A `factor` of zero is treated as 1.
///
/// # Errors
///
/// Same conditions as [`write_png`].
pub fn write_png_scaled(
    dir: &Path,
    name: &str,
    tag: &str,
    pixels: &Pixels,
    factor: u32,
) -> Result<PathBuf, RasterError> {
    fs::create_dir_all(dir).map_err(|source| RasterError::ArtifactDir {
        path: dir.to_path_buf(),
        source,
    })?;
    let factor = factor.max(1);
    let path = dir.join(format!("{name}-{tag}.png"));

    let width = pixels.width() * factor;
    let height = pixels.height() * factor;
    let preview = RgbaImage::from_fn(width, height, |x, y| {
        let color = pixels.color(x / factor, y / factor);
        image::Rgba([color.r, color.g, color.b, color.a])
    });
    preview.save(&path).map_err(|source| RasterError::Artifact {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
