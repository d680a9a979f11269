//! Run-length line detection and table/chart assembly.
//!
//! Lines are found with a 1-D scan: along each row (column) the luminance is
//! read pixel by pixel and a dark run accumulates while it stays below
//! `dark_threshold`. When the run breaks, or the row ends, it is emitted as a
//! segment if it is longer than `min_length`. This is a deliberate
//! substitute for a Hough transform: it only finds axis-aligned, unbroken
//! rules, which is what table grids and chart axes are made of.
//!
//! Tables are assembled from crossing horizontal/vertical pairs expanded with
//! nearby lines (see [`find_table_structures`]). A structure made of exactly
//! one horizontal and one vertical line meeting at their ends in an L is a
//! chart axis pair rather than a table (see [`split_chart_axes`]).

mod chart;
mod options;
mod runs;
mod table;

pub use chart::split_chart_axes;
pub use options::LineOptions;
pub use runs::{detect_horizontal_lines, detect_vertical_lines};
pub use table::{find_table_structures, TableStructure};

use crate::types::Region;
use serde::Serialize;

/// Horizontal dark run starting at `(x, y)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct HorizontalLine {
    pub x: usize,
    pub y: usize,
    pub width: usize,
}

/// Vertical dark run starting at `(x, y)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct VerticalLine {
    pub x: usize,
    pub y: usize,
    pub height: usize,
}

impl HorizontalLine {
    #[inline]
    pub fn right(&self) -> usize {
        self.x + self.width
    }

    pub fn bounds(&self) -> Region {
        Region::new(self.x, self.y, self.width, 1)
    }
}

impl VerticalLine {
    #[inline]
    pub fn bottom(&self) -> usize {
        self.y + self.height
    }

    pub fn bounds(&self) -> Region {
        Region::new(self.x, self.y, 1, self.height)
    }
}

/// `v.x` within `[h.x, h.x + h.width]` and `h.y` within `[v.y, v.y + v.height]`.
#[inline]
pub fn intersects(h: &HorizontalLine, v: &VerticalLine) -> bool {
    v.x >= h.x && v.x <= h.right() && h.y >= v.y && h.y <= v.bottom()
}
