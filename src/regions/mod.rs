//! Connected-region finder: seeded 4-connected flood fill.
//!
//! The image is scanned on a coarse grid (`stride`) for unvisited pixels
//! that a [`FillCriterion`] accepts as seeds. Each seed is grown with an
//! iterative, stack-based flood fill that tracks the running min/max x/y.
//! A fill becomes a [`Region`] only if it touched at least
//! `min_pixel_count` pixels and spans more than one row and one column.
//!
//! Stride is a speed/recall tradeoff: a shape narrower and shorter than the
//! stride can fall between seeds and be missed, but every pixel reachable
//! from a seed is still filled exactly. Defaults scan edges every 5th pixel
//! and colors every 10th.
//!
//! Two criteria ship with the crate:
//! - [`EdgeCriterion`]: edge intensity strictly above a threshold.
//! - [`ColorCriterion`]: RGB distance from the seed within a delta; near-white
//!   seeds are skipped so page background is not reported.

mod criteria;
mod fill;
mod options;

pub use criteria::{ColorCriterion, EdgeCriterion, FillCriterion};
pub use options::{RegionOptions, ScanOptions};

use crate::budget::Deadline;
use crate::edges::EdgeMap;
use crate::image::{ImageView, RasterImage, Rgba};
use crate::types::Region;
use fill::{flood_fill, FillAccumulator};
use log::{debug, warn};

/// Find regions grown from stride-sampled seeds accepted by `criterion`.
pub fn find_regions<I, C>(image: &I, criterion: &C, min_pixel_count: usize, scan: ScanOptions) -> Vec<Region>
where
    I: ImageView<Pixel = Rgba>,
    C: FillCriterion + ?Sized,
{
    find_regions_until(image, criterion, min_pixel_count, scan, &Deadline::none())
}

/// As [`find_regions`], stopping early once `deadline` expires.
pub fn find_regions_until<I, C>(
    image: &I,
    criterion: &C,
    min_pixel_count: usize,
    scan: ScanOptions,
    deadline: &Deadline,
) -> Vec<Region>
where
    I: ImageView<Pixel = Rgba>,
    C: FillCriterion + ?Sized,
{
    let w = image.width();
    let h = image.height();
    let stride = scan.stride.max(1);
    let mut visited = vec![false; w * h];
    let mut stack = Vec::new();
    let mut acc = FillAccumulator::default();
    let mut regions = Vec::new();
    let mut seeds = 0usize;

    'scan: for y in (0..h).step_by(stride) {
        if deadline.expired() {
            warn!("find_regions: deadline expired at row {y}, returning {} regions", regions.len());
            break;
        }
        for x in (0..w).step_by(stride) {
            if visited[y * w + x] {
                continue;
            }
            let seed = image.pixel(x, y);
            if !criterion.accepts_seed(seed) {
                continue;
            }
            seeds += 1;
            flood_fill(image, criterion, (x, y), &mut visited, &mut stack, &mut acc);
            if acc.count() < min_pixel_count {
                continue;
            }
            if let Some(region) = acc.region() {
                regions.push(region);
                if scan.cap_reached(regions.len()) {
                    warn!("find_regions: region cap {} reached", scan.max_regions);
                    break 'scan;
                }
            }
        }
    }

    debug!(
        "find_regions {}x{} stride={} seeds={} regions={}",
        w,
        h,
        stride,
        seeds,
        regions.len()
    );
    regions
}

/// Edge-based regions over an edge map.
pub fn find_edge_regions(edges: &EdgeMap, options: &RegionOptions, deadline: &Deadline) -> Vec<Region> {
    find_regions_until(
        edges,
        &options.edge_criterion(),
        options.edge_min_pixels,
        options.edge_scan(),
        deadline,
    )
}

/// Color-based regions over the source raster.
pub fn find_color_regions(image: &RasterImage, options: &RegionOptions, deadline: &Deadline) -> Vec<Region> {
    find_regions_until(
        image,
        &options.color_criterion(),
        options.color_min_pixels,
        options.color_scan(),
        deadline,
    )
}
