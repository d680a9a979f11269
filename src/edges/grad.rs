//! Sobel gradient magnitude on a single-channel float plane.
//!
//! Only interior pixels are convolved; the outermost frame is left at zero.
//! Complexity: O(W·H), one output buffer.
use crate::image::{ImageF32, ImageView};
use rayon::prelude::*;

type Kernel3 = [[f32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Upper bound of the stored magnitude (8-bit storage).
pub const MAX_MAGNITUDE: f32 = 255.0;

/// Map a raw magnitude into `[0, 255]`; NaN becomes 0 and +inf saturates.
#[inline]
pub fn clamp_magnitude(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, MAX_MAGNITUDE)
    }
}

/// Sobel magnitude `sqrt(gx² + gy²)` per interior pixel, clamped to 0–255.
pub fn sobel_magnitude(l: &ImageF32) -> ImageF32 {
    let w = l.w;
    let h = l.h;
    let mut mag = ImageF32::new(w, h);
    if w < 3 || h < 3 {
        return mag;
    }

    mag.data
        .par_chunks_mut(w)
        .enumerate()
        .skip(1)
        .take(h - 2)
        .for_each(|(y, out)| {
            let rows = [l.row(y - 1), l.row(y), l.row(y + 1)];
            for x in 1..w - 1 {
                let mut sum_x = 0.0;
                let mut sum_y = 0.0;
                for (ky, yy_row) in rows.iter().enumerate() {
                    let kx_row = &SOBEL_KERNEL_X[ky];
                    let ky_row = &SOBEL_KERNEL_Y[ky];
                    sum_x += yy_row[x - 1] * kx_row[0]
                        + yy_row[x] * kx_row[1]
                        + yy_row[x + 1] * kx_row[2];
                    sum_y += yy_row[x - 1] * ky_row[0]
                        + yy_row[x] * ky_row[1]
                        + yy_row[x + 1] * ky_row[2];
                }
                out[x] = clamp_magnitude((sum_x * sum_x + sum_y * sum_y).sqrt());
            }
        });

    mag
}
