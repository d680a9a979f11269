use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ContourOptions {
    /// Edge magnitude a pixel must exceed to be walked.
    pub edge_threshold: u8,
    /// Hard cap on points per contour.
    pub max_points: usize,
    /// Contours shorter than this are ignored by the classifier.
    pub min_points: usize,
    /// Seed grid spacing for `trace_contours`.
    pub scan_stride: usize,
    /// Stop scanning after this many contours.
    pub max_contours: usize,
}

impl Default for ContourOptions {
    fn default() -> Self {
        Self {
            edge_threshold: 50,
            max_points: 1000,
            min_points: 20,
            scan_stride: 5,
            max_contours: 500,
        }
    }
}

impl ContourOptions {
    /// Whether a scan holding `found` contours has hit `max_contours`.
    pub fn cap_reached(&self, found: usize) -> bool {
        found >= self.max_contours
    }
}
