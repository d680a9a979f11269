//! Pixel containers shared by every stage.
//!
//! - [`RasterImage`]: validated, immutable RGBA input.
//! - [`ImageF32`]: owned single-channel float plane (luminance).
//! - [`ImageView`]: row access common to both, plus the edge map.
pub mod f32;
pub mod io;
pub mod raster;
pub mod traits;

pub use self::f32::ImageF32;
pub use self::raster::{luminance, RasterImage, Rgba};
pub use self::traits::{ImageView, ImageViewMut, Rows};
