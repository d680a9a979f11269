use crate::image::io::read_json_file;
use crate::segmenter::SegmenterParams;
use crate::types::ExternalRegion;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct SegmentToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub params: SegmenterParams,
    /// JSON list of externally detected regions to merge with.
    #[serde(default)]
    pub external: Option<PathBuf>,
    /// Wall-clock budget for one run; unlimited when absent.
    #[serde(default)]
    pub deadline_ms: Option<u64>,
    pub output: SegmentOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct SegmentOutputConfig {
    #[serde(rename = "edges_image")]
    pub edges_image: PathBuf,
    #[serde(rename = "components_json")]
    pub components_json: PathBuf,
}

pub fn load_config(path: &Path) -> Result<SegmentToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn parse_config(data: &str) -> Result<SegmentToolConfig, serde_json::Error> {
    serde_json::from_str(data)
}

pub fn load_external_regions(path: &Path) -> Result<Vec<ExternalRegion>, String> {
    read_json_file(path)
}
