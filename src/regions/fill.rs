use super::criteria::FillCriterion;
use crate::image::{ImageView, Rgba};
use crate::types::Region;

/// Running statistics of the current fill.
#[derive(Debug, Default)]
pub(crate) struct FillAccumulator {
    count: usize,
    min_x: usize,
    min_y: usize,
    max_x: usize,
    max_y: usize,
}

impl FillAccumulator {
    pub(crate) fn reset(&mut self) {
        *self = Self {
            count: 0,
            min_x: usize::MAX,
            min_y: usize::MAX,
            max_x: 0,
            max_y: 0,
        };
    }

    #[inline]
    pub(crate) fn push(&mut self, x: usize, y: usize) {
        self.count += 1;
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    pub(crate) fn count(&self) -> usize {
        self.count
    }

    /// Bounding box of the fill, or `None` when it collapses to a single
    /// row or column (zero width or height in min/max terms).
    pub(crate) fn region(&self) -> Option<Region> {
        if self.count == 0 || self.max_x <= self.min_x || self.max_y <= self.min_y {
            return None;
        }
        Some(Region::from_extent(
            self.min_x, self.min_y, self.max_x, self.max_y,
        ))
    }
}

/// Iterative 4-connected flood fill from `start`. Pixels are marked visited
/// when pushed, so each one is examined at most once per scan.
pub(crate) fn flood_fill<I, C>(
    image: &I,
    criterion: &C,
    start: (usize, usize),
    visited: &mut [bool],
    stack: &mut Vec<(usize, usize)>,
    acc: &mut FillAccumulator,
) where
    I: ImageView<Pixel = Rgba>,
    C: FillCriterion + ?Sized,
{
    let w = image.width();
    let h = image.height();
    acc.reset();
    stack.clear();

    let seed = image.pixel(start.0, start.1);
    visited[start.1 * w + start.0] = true;
    stack.push(start);

    while let Some((x, y)) = stack.pop() {
        acc.push(x, y);
        let neighbours = [
            (x.checked_sub(1), Some(y)),
            (Some(x + 1), Some(y)),
            (Some(x), y.checked_sub(1)),
            (Some(x), Some(y + 1)),
        ];
        for (nx, ny) in neighbours {
            let (Some(nx), Some(ny)) = (nx, ny) else {
                continue;
            };
            if nx >= w || ny >= h {
                continue;
            }
            let idx = ny * w + nx;
            if visited[idx] || !criterion.accepts(seed, image.pixel(nx, ny)) {
                continue;
            }
            visited[idx] = true;
            stack.push((nx, ny));
        }
    }
}
