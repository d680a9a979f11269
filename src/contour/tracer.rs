use super::options::ContourOptions;
use crate::edges::EdgeMap;
use crate::image::ImageView;
use crate::types::Region;
use serde::Serialize;
use std::collections::HashSet;

/// Integer pixel position on a contour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

/// Ordered boundary walk.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Contour {
    pub points: Vec<Point>,
    /// The walk came back to a state it had already passed through.
    pub closed: bool,
}

impl Contour {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Bounding box of the points (pixel extents).
    pub fn bounds(&self) -> Option<Region> {
        let first = self.points.first()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in &self.points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(Region::from_extent(min_x, min_y, max_x, max_y))
    }

    /// `len² / (bounds.width * bounds.height)`; low for compact blobs,
    /// high for long diffuse walks. Empty contours score 0.
    pub fn compactness(&self) -> f32 {
        match self.bounds() {
            Some(b) => {
                let n = self.points.len() as f32;
                n * n / b.area().max(1) as f32
            }
            None => 0.0,
        }
    }
}

/// Ring of 8 neighbours, clockwise from east (y grows downwards).
const RING: [(isize, isize); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

#[inline]
fn step(x: usize, y: usize, d: usize, w: usize, h: usize) -> Option<(usize, usize)> {
    let (dx, dy) = RING[d];
    let nx = x.checked_add_signed(dx)?;
    let ny = y.checked_add_signed(dy)?;
    (nx < w && ny < h).then_some((nx, ny))
}

#[inline]
fn is_edge(map: &EdgeMap, x: usize, y: usize, d: usize, threshold: u8) -> bool {
    step(x, y, d, map.width(), map.height())
        .is_some_and(|(nx, ny)| map.magnitude(nx, ny) > threshold)
}

/// Ring index of the first background neighbour of `(x, y)`, scanning
/// clockwise from west. `None` when all 8 neighbours are edge pixels.
/// Off-image neighbours count as background.
pub(super) fn initial_backtrack(map: &EdgeMap, (x, y): (usize, usize), threshold: u8) -> Option<usize> {
    (0..8)
        .map(|i| (4 + i) % 8)
        .find(|&d| !is_edge(map, x, y, d, threshold))
}

/// One Moore step from `(x, y)` with background neighbour `back`: scan
/// clockwise from `back` and move to the first edge pixel. Returns the new
/// position and the ring index, seen from it, of the last background cell
/// scanned before it.
fn moore_step(
    map: &EdgeMap,
    (x, y): (usize, usize),
    back: usize,
    threshold: u8,
) -> Option<((usize, usize), usize)> {
    let (w, h) = (map.width(), map.height());
    for i in 1..8 {
        let d = (back + i) % 8;
        if !is_edge(map, x, y, d, threshold) {
            continue;
        }
        let next = step(x, y, d, w, h)?;
        let (px, py) = RING[(d + 7) % 8];
        let bx = x as isize + px - next.0 as isize;
        let by = y as isize + py - next.1 as isize;
        let back = RING.iter().position(|&r| r == (bx, by))?;
        return Some((next, back));
    }
    None
}

/// Moore-neighbour walk along the boundary through `start`.
///
/// The walk keeps background on one side: the backtrack is the first
/// background neighbour of `start` clockwise from west, and each step scans
/// clockwise from the current backtrack. It ends `closed` when a
/// (pixel, backtrack) state recurs, so one boundary yields one contour.
/// Walked pixels are marked in `visited` (row-major, `width * height`);
/// `start` is the first point.
pub fn trace_contour(
    map: &EdgeMap,
    start: (usize, usize),
    visited: &mut [bool],
    options: &ContourOptions,
) -> Contour {
    let w = map.width();
    let h = map.height();
    let (sx, sy) = start;
    if sx >= w || sy >= h || options.max_points == 0 {
        return Contour::default();
    }

    visited[sy * w + sx] = true;
    let mut points = vec![Point { x: sx, y: sy }];
    let Some(mut back) = initial_backtrack(map, start, options.edge_threshold) else {
        return Contour {
            points,
            closed: false,
        };
    };

    let mut seen: HashSet<(usize, usize)> = HashSet::new();
    seen.insert((sy * w + sx, back));
    let mut cur = start;
    let mut closed = false;

    while points.len() < options.max_points {
        let Some((next, next_back)) = moore_step(map, cur, back, options.edge_threshold) else {
            break;
        };
        let idx = next.1 * w + next.0;
        if !seen.insert((idx, next_back)) {
            closed = true;
            break;
        }
        visited[idx] = true;
        points.push(Point { x: next.0, y: next.1 });
        cur = next;
        back = next_back;
    }
    if closed && points.len() > 1 && points.last() == points.first() {
        points.pop();
    }

    Contour { points, closed }
}
