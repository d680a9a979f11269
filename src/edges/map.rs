use super::grad::clamp_magnitude;
use crate::image::{ImageF32, ImageView, RasterImage, Rgba};

/// Edge magnitudes stored as a grayscale raster (R = G = B, A = 255).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeMap {
    raster: RasterImage,
}

impl EdgeMap {
    pub(crate) fn from_magnitude(mag: &ImageF32) -> Self {
        let data = mag
            .rows()
            .flat_map(|row| row.iter())
            .map(|&m| {
                let v = clamp_magnitude(m).round() as u8;
                [v, v, v, 255]
            })
            .collect();
        Self {
            raster: RasterImage::derived(mag.w, mag.h, data),
        }
    }

    #[inline]
    pub fn magnitude(&self, x: usize, y: usize) -> u8 {
        self.raster.get(x, y)[0]
    }

    /// Number of pixels whose magnitude is strictly above `threshold`.
    pub fn edge_pixel_count(&self, threshold: u8) -> usize {
        self.raster
            .pixels()
            .iter()
            .filter(|px| px[0] > threshold)
            .count()
    }
}

impl ImageView for EdgeMap {
    type Pixel = Rgba;

    #[inline]
    fn width(&self) -> usize {
        self.raster.width()
    }
    #[inline]
    fn height(&self) -> usize {
        self.raster.height()
    }
    #[inline]
    fn stride(&self) -> usize {
        self.raster.stride()
    }
    #[inline]
    fn row(&self, y: usize) -> &[Rgba] {
        self.raster.row(y)
    }
    #[inline]
    fn as_slice(&self) -> Option<&[Rgba]> {
        self.raster.as_slice()
    }
}
