//! Sparse pixel sampling inside a region.
use crate::image::{luminance, RasterImage};
use crate::types::Region;
use std::collections::HashSet;

fn clip(region: &Region, image: &RasterImage) -> Option<Region> {
    let (w, h) = image.dimensions();
    if region.x >= w || region.y >= h {
        return None;
    }
    let clipped = Region::new(
        region.x,
        region.y,
        region.width.min(w - region.x),
        region.height.min(h - region.y),
    );
    (!clipped.is_empty()).then_some(clipped)
}

/// `n` evenly spaced coordinates over `start..start + len` (fewer if `len < n`).
fn axis(start: usize, len: usize, n: usize) -> impl Iterator<Item = usize> + Clone {
    let n = n.max(1).min(len);
    (0..n).map(move |i| {
        if n == 1 {
            start + len / 2
        } else {
            start + i * (len - 1) / (n - 1)
        }
    })
}

fn grid(region: Region, n: usize) -> impl Iterator<Item = (usize, usize)> {
    let xs = axis(region.x, region.width, n);
    axis(region.y, region.height, n).flat_map(move |y| xs.clone().map(move |x| (x, y)))
}

/// Number of distinct colors (3 bits per channel) on an `n × n` sample grid.
pub fn distinct_quantized_colors(image: &RasterImage, region: &Region, n: usize) -> usize {
    let Some(region) = clip(region, image) else {
        return 0;
    };
    grid(region, n)
        .map(|(x, y)| {
            let px = image.get(x, y);
            ((px[0] >> 5) as u16) << 6 | ((px[1] >> 5) as u16) << 3 | (px[2] >> 5) as u16
        })
        .collect::<HashSet<u16>>()
        .len()
}

/// `max - min` luminance on an `n × n` sample grid; 0 for empty regions.
pub fn brightness_range(image: &RasterImage, region: &Region, n: usize) -> f32 {
    let Some(region) = clip(region, image) else {
        return 0.0;
    };
    let (lo, hi) = grid(region, n).fold((f32::MAX, f32::MIN), |(lo, hi), (x, y)| {
        let l = luminance(image.get(x, y));
        (lo.min(l), hi.max(l))
    });
    if hi >= lo {
        hi - lo
    } else {
        0.0
    }
}
