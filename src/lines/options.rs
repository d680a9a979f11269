use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct LineOptions {
    /// Luminance (0–255) below which a pixel counts as dark.
    pub dark_threshold: f32,
    /// A run must be strictly longer than this to become a line.
    pub min_length: usize,
    /// Distance within which neighbouring lines join a table or chart.
    pub proximity_px: usize,
    /// Both table sides must be strictly larger than this.
    pub min_table_extent: usize,
    /// Both chart sides must be strictly larger than this.
    pub min_chart_extent: usize,
    /// Maximum gap between the axis ends of an L-shaped chart corner.
    pub corner_tolerance_px: usize,
}

impl Default for LineOptions {
    fn default() -> Self {
        Self {
            dark_threshold: 100.0,
            min_length: 50,
            proximity_px: 50,
            min_table_extent: 50,
            min_chart_extent: 50,
            corner_tolerance_px: 3,
        }
    }
}
