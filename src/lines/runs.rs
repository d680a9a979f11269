use super::options::LineOptions;
use super::{HorizontalLine, VerticalLine};
use crate::image::{luminance, ImageView, Rgba};
use log::debug;
use rayon::prelude::*;

/// Dark runs in `samples`, as `(start, length)` pairs longer than
/// `min_length`. A run still open at the end is flushed.
fn dark_runs<It>(samples: It, dark_threshold: f32, min_length: usize) -> Vec<(usize, usize)>
where
    It: Iterator<Item = Rgba>,
{
    let mut runs = Vec::new();
    let mut start = 0usize;
    let mut len = 0usize;
    let mut pos = 0usize;
    for px in samples {
        if luminance(px) < dark_threshold {
            if len == 0 {
                start = pos;
            }
            len += 1;
        } else {
            if len > min_length {
                runs.push((start, len));
            }
            len = 0;
        }
        pos += 1;
    }
    if len > min_length {
        runs.push((start, len));
    }
    runs
}

/// Horizontal dark runs, row by row.
pub fn detect_horizontal_lines<I>(image: &I, options: &LineOptions) -> Vec<HorizontalLine>
where
    I: ImageView<Pixel = Rgba> + Sync,
{
    let lines: Vec<HorizontalLine> = (0..image.height())
        .into_par_iter()
        .flat_map_iter(|y| {
            dark_runs(
                image.row(y).iter().copied(),
                options.dark_threshold,
                options.min_length,
            )
            .into_iter()
            .map(move |(x, width)| HorizontalLine { x, y, width })
        })
        .collect();
    debug!("detect_horizontal_lines: {} lines", lines.len());
    lines
}

/// Vertical dark runs, column by column.
pub fn detect_vertical_lines<I>(image: &I, options: &LineOptions) -> Vec<VerticalLine>
where
    I: ImageView<Pixel = Rgba> + Sync,
{
    let h = image.height();
    let lines: Vec<VerticalLine> = (0..image.width())
        .into_par_iter()
        .flat_map_iter(|x| {
            dark_runs(
                (0..h).map(move |y| image.pixel(x, y)),
                options.dark_threshold,
                options.min_length,
            )
            .into_iter()
            .map(move |(y, height)| VerticalLine { x, y, height })
        })
        .collect();
    debug!("detect_vertical_lines: {} lines", lines.len());
    lines
}
