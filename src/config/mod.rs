//! JSON configuration for the command-line tools.

pub mod segment;

pub use segment::{load_config, load_external_regions, SegmentOutputConfig, SegmentToolConfig};
