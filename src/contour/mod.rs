//! Boundary-following contour tracer over an edge map.
//!
//! Contours are Moore-neighbour walks. Each step scans the 8 neighbours
//! clockwise, starting from the background cell the walk last passed, and
//! moves to the first edge pixel. The background side therefore never
//! changes, and the 2-px Sobel band around a solid shape is traced as two
//! separate rings (inner and outer) rather than one fused walk.
//!
//! A walk ends `closed` when a (pixel, backtrack) state recurs, when no
//! neighbour qualifies, or when `max_points` is reached. Seeds whose 8
//! neighbours are all edge pixels lie inside a band and are skipped.
//! Short contours are kept here; the classifier applies the length floor.

mod options;
mod tracer;

pub use options::ContourOptions;
pub use tracer::{trace_contour, Contour, Point};

use tracer::initial_backtrack;

use crate::budget::Deadline;
use crate::edges::EdgeMap;
use crate::image::ImageView;
use log::{debug, warn};

/// Trace contours from stride-sampled unvisited edge pixels.
pub fn trace_contours(map: &EdgeMap, options: &ContourOptions, deadline: &Deadline) -> Vec<Contour> {
    let w = map.width();
    let h = map.height();
    let stride = options.scan_stride.max(1);
    let mut visited = vec![false; w * h];
    let mut contours = Vec::new();

    'scan: for y in (0..h).step_by(stride) {
        if deadline.expired() {
            warn!("trace_contours: deadline expired at row {y}");
            break;
        }
        for x in (0..w).step_by(stride) {
            if visited[y * w + x] || map.magnitude(x, y) <= options.edge_threshold {
                continue;
            }
            if initial_backtrack(map, (x, y), options.edge_threshold).is_none() {
                continue;
            }
            contours.push(trace_contour(map, (x, y), &mut visited, options));
            if options.cap_reached(contours.len()) {
                warn!("trace_contours: contour cap {} reached", options.max_contours);
                break 'scan;
            }
        }
    }

    debug!("trace_contours {}x{} contours={}", w, h, contours.len());
    contours
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edges::detect_edges;
    use crate::image::RasterImage;
    use crate::types::Region;

    fn ring_image(w: usize, h: usize, outer: Region, thickness: usize) -> RasterImage {
        let mut px = vec![[255u8, 255, 255, 255]; w * h];
        for y in outer.y..outer.bottom() {
            for x in outer.x..outer.right() {
                let inside = x >= outer.x + thickness
                    && x < outer.right() - thickness
                    && y >= outer.y + thickness
                    && y < outer.bottom() - thickness;
                if !inside {
                    px[y * w + x] = [0, 0, 0, 255];
                }
            }
        }
        RasterImage::from_pixels(w, h, px).unwrap()
    }

    #[test]
    fn blank_map_yields_no_contours() {
        let img = RasterImage::filled(40, 40, [255, 255, 255, 255]).unwrap();
        let edges = detect_edges(&img);
        assert!(trace_contours(&edges, &ContourOptions::default(), &Deadline::none()).is_empty());
    }

    #[test]
    fn square_outline_produces_long_compact_contour() {
        let img = ring_image(80, 80, Region::new(20, 20, 30, 30), 2);
        let edges = detect_edges(&img);
        let contours = trace_contours(&edges, &ContourOptions::default(), &Deadline::none());
        assert!(!contours.is_empty());
        for c in &contours {
            let bounds = c.bounds().expect("traced contours hold their seed");
            assert!(bounds.is_within(80, 80));
        }
        let outline = contours
            .iter()
            .filter(|c| c.len() >= 20)
            .find(|c| {
                let b = c.bounds().unwrap_or_default();
                b.width >= 25 && b.height >= 25
            })
            .expect("a contour spanning the square");
        assert!(outline.closed);
        assert!(outline.compactness() < 50.0, "compactness={}", outline.compactness());
    }

    #[test]
    fn contour_cap_is_respected() {
        let img = ring_image(80, 80, Region::new(20, 20, 30, 30), 2);
        let edges = detect_edges(&img);
        let options = ContourOptions {
            max_contours: 1,
            ..Default::default()
        };
        assert_eq!(trace_contours(&edges, &options, &Deadline::none()).len(), 1);
    }
}
