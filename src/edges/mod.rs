//! Gradient-magnitude edge map (Sobel) over an RGBA raster.
//!
//! - Converts each pixel to luminance `0.299 R + 0.587 G + 0.114 B`.
//! - Convolves interior pixels with the 3×3 Sobel pair and stores
//!   `sqrt(gx² + gy²)` clamped to 0–255. The 1-pixel border stays zero.
//! - The magnitude is written to R, G and B (alpha 255) so the edge map can
//!   be handed to anything that accepts a raster, including the color-based
//!   region finder.
//!
//! The function is pure and deterministic; rows are convolved in parallel
//! but each output row depends only on the immutable luminance plane.

pub mod grad;
pub mod map;

pub use grad::sobel_magnitude;
pub use map::EdgeMap;

use crate::image::{ImageF32, RasterImage};
use log::debug;
use std::time::Instant;

/// Compute the edge map of `image`.
pub fn detect_edges(image: &RasterImage) -> EdgeMap {
    let start = Instant::now();
    let luma = ImageF32::luminance_of(image);
    let mag = sobel_magnitude(&luma);
    let map = EdgeMap::from_magnitude(&mag);
    debug!(
        "detect_edges {}x{} in {:.3} ms",
        mag.w,
        mag.h,
        start.elapsed().as_secs_f64() * 1000.0
    );
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageView;

    fn split_image(w: usize, h: usize, split_x: usize) -> RasterImage {
        let mut px = Vec::with_capacity(w * h);
        for _ in 0..h {
            for x in 0..w {
                let v = if x < split_x { 0 } else { 255 };
                px.push([v, v, v, 255]);
            }
        }
        RasterImage::from_pixels(w, h, px).unwrap()
    }

    #[test]
    fn flat_image_has_no_edges() {
        let img = RasterImage::filled(16, 16, [255, 255, 255, 255]).unwrap();
        let edges = detect_edges(&img);
        assert_eq!(edges.edge_pixel_count(0), 0);
    }

    #[test]
    fn vertical_step_produces_saturated_column() {
        let img = split_image(16, 8, 8);
        let edges = detect_edges(&img);
        for y in 1..7 {
            assert_eq!(edges.magnitude(7, y), 255);
            assert_eq!(edges.magnitude(8, y), 255);
            assert_eq!(edges.magnitude(3, y), 0);
            assert_eq!(edges.magnitude(12, y), 0);
        }
        let px = edges.pixel(7, 3);
        assert_eq!(px, [255, 255, 255, 255]);
    }

    #[test]
    fn border_pixels_stay_zero() {
        let img = split_image(16, 8, 8);
        let edges = detect_edges(&img);
        for x in 0..16 {
            assert_eq!(edges.magnitude(x, 0), 0);
            assert_eq!(edges.magnitude(x, 7), 0);
        }
    }

    #[test]
    fn detection_is_deterministic() {
        let img = split_image(33, 21, 11);
        assert_eq!(detect_edges(&img), detect_edges(&img));
    }

    #[test]
    fn tiny_images_are_all_border() {
        let img = RasterImage::filled(2, 2, [0, 0, 0, 255]).unwrap();
        let edges = detect_edges(&img);
        assert_eq!(edges.width(), 2);
        assert_eq!(edges.edge_pixel_count(0), 0);
    }
}
