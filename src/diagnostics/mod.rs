//! Diagnostics returned alongside every segmentation run.
//!
//! [`SegmentationReport`] bundles the final components with the resolved
//! candidates, per-stage [`StageCounts`] and a [`TimingBreakdown`]. All types
//! serialize to camelCase JSON for the CLI.

pub mod report;
pub mod timing;

pub use report::{InputDescriptor, SegmentationReport, StageCounts};
pub use timing::{StageTiming, TimingBreakdown};
