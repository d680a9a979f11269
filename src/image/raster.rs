//! Owned RGBA raster, validated once at construction.
//!
//! Every detector reads a `RasterImage` and returns a fresh derived value;
//! the buffer is never mutated after it is built.
use crate::error::InputError;
use crate::image::traits::ImageView;

/// One RGBA sample, 0–255 per channel.
pub type Rgba = [u8; 4];

/// Rec. 601 luma: `0.299 R + 0.587 G + 0.114 B`, in 0–255.
#[inline]
pub fn luminance(px: Rgba) -> f32 {
    0.299 * px[0] as f32 + 0.587 * px[1] as f32 + 0.114 * px[2] as f32
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    w: usize,
    h: usize,
    data: Vec<Rgba>,
}

impl RasterImage {
    /// Build from interleaved RGBA bytes (`width * height * 4` of them).
    pub fn from_rgba_bytes(width: usize, height: usize, bytes: &[u8]) -> Result<Self, InputError> {
        let pixels = checked_pixel_count(width, height)?;
        let expected = pixels
            .checked_mul(4)
            .ok_or(InputError::DimensionOverflow { width, height })?;
        if bytes.is_empty() {
            return Err(InputError::EmptyBuffer);
        }
        if bytes.len() != expected {
            return Err(InputError::BufferSizeMismatch {
                width,
                height,
                expected,
                actual: bytes.len(),
            });
        }
        let data = bytes
            .chunks_exact(4)
            .map(|c| [c[0], c[1], c[2], c[3]])
            .collect();
        Ok(Self {
            w: width,
            h: height,
            data,
        })
    }

    /// Build from one `Rgba` per pixel in row-major order.
    pub fn from_pixels(width: usize, height: usize, data: Vec<Rgba>) -> Result<Self, InputError> {
        let expected = checked_pixel_count(width, height)?;
        if data.is_empty() {
            return Err(InputError::EmptyBuffer);
        }
        if data.len() != expected {
            return Err(InputError::BufferSizeMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            w: width,
            h: height,
            data,
        })
    }

    /// Uniform image of a single color.
    pub fn filled(width: usize, height: usize, px: Rgba) -> Result<Self, InputError> {
        let n = checked_pixel_count(width, height)?;
        Self::from_pixels(width, height, vec![px; n])
    }

    /// Derived images reuse the dimensions of an already validated source.
    pub(crate) fn derived(width: usize, height: usize, data: Vec<Rgba>) -> Self {
        debug_assert_eq!(data.len(), width * height);
        Self {
            w: width,
            h: height,
            data,
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgba {
        self.data[y * self.w + x]
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.data
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.w, self.h)
    }
}

fn checked_pixel_count(width: usize, height: usize) -> Result<usize, InputError> {
    if width == 0 || height == 0 {
        return Err(InputError::InvalidDimensions { width, height });
    }
    width
        .checked_mul(height)
        .ok_or(InputError::DimensionOverflow { width, height })
}

impl ImageView for RasterImage {
    type Pixel = Rgba;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.w
    }
    #[inline]
    fn row(&self, y: usize) -> &[Rgba] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[Rgba]> {
        Some(&self.data)
    }
}
