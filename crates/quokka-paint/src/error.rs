//! Paint-stage errors.
//!
//! Every error here aborts the current render: correctness is binary by
//! design, so nothing is recovered in place.

use quokka_raster::RasterError;
use thiserror::Error;

/// Errors raised while painting a box tree.
#[derive(Debug, Error)]
pub enum PaintError {
    /// A background arrived with an empty layer list, so there is no
    /// bottom layer to derive the color's painting area from. Upstream
    /// must supply at least one layer, even a zero-sized one.
    #[error("background has no layers to derive a painting area from")]
    MissingBackgroundLayer,

    /// Surface allocation or artifact writing failed.
    #[error(transparent)]
    Raster(#[from] RasterError),

    /// An inline-content or background-image painter failed.
    #[error("content painter failed: {0}")]
    Collaborator(#[from] anyhow::Error),
}
