//! Raster error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by surface allocation and artifact writing.
///
/// All of these are fatal to the current render: there is no retry and no
/// fallback resolution.
#[derive(Debug, Error)]
pub enum RasterError {
    /// The requested surface size cannot be represented in memory.
    #[error("cannot allocate a {width}x{height} raster surface")]
    Allocation {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// The artifact directory could not be created.
    #[error("failed to create artifact directory '{path}': {source}")]
    ArtifactDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The artifact image could not be encoded or written.
    #[error("failed to write raster artifact '{path}': {source}")]
    Artifact {
        /// File that could not be written.
        path: PathBuf,
        /// Underlying encoder error.
        source: image::ImageError,
    },
}
