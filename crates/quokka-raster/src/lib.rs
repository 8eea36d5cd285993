//! Raster surface management for the Quokka paint stage.
//!
//! This crate owns the pixel memory the compositor paints into:
//! - **Surface** - a zero-initialized premultiplied-ARGB buffer, allocated
//!   once per render and extracted once afterwards
//! - **Graphics context** - the mutable painting cursor (clip region,
//!   antialiasing mode, source color) with scoped save/restore semantics
//! - **Artifacts** - PNG snapshots of rendered pixels for visual
//!   inspection outside the automated comparator
//!
//! The graphics state is only ever mutated inside a [`stacked`] scope, so a
//! failure partway through painting one subtree cannot leak clip or
//! antialiasing state into a sibling subtree.

pub mod artifact;
pub mod context;
pub mod error;
pub mod surface;

pub use artifact::{write_png, write_png_scaled};
pub use context::{Antialias, GraphicsContext, Stacked, stacked};
pub use error::RasterError;
pub use surface::{BYTES_PER_PIXEL, Pixels, Surface};
