//! Common data types for the Quokka paint stage.
//!
//! This crate provides the shared vocabulary used by every other component:
//! - **Geometry** - rectangles, edge sizes, and rounded rectangles
//! - **Color** - straight-alpha RGBA with premultiplied ARGB conversions
//! - **Image data** - decoded raster images handed over by the loader

pub mod color;
pub mod geometry;
pub mod image;

pub use color::Rgba;
pub use geometry::{CornerRadii, EdgeSizes, Rect, RoundedRect};
pub use image::LoadedImage;
