//! Input validation errors.
//!
//! Only malformed input is fatal. A well-formed image that yields no regions
//! is reported as an empty result, never as an error.
use thiserror::Error;

/// Rejections raised while constructing a [`crate::image::RasterImage`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InputError {
    /// Width or height is zero.
    #[error("image dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// The pixel buffer holds no data.
    #[error("pixel buffer is empty")]
    EmptyBuffer,
    /// The buffer length does not match `width * height` pixels.
    #[error("pixel buffer holds {actual} elements, expected {expected} for a {width}x{height} image")]
    BufferSizeMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },
    /// `width * height * 4` does not fit in `usize`.
    #[error("image dimensions {width}x{height} overflow the addressable size")]
    DimensionOverflow { width: usize, height: usize },
}
