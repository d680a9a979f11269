//! Rule-based region classification.
//!
//! Each candidate region carries [`RegionEvidence`] naming how it was found.
//! The evidence restricts which types are considered: blobs may be text,
//! image or icon; contours may additionally be a logo; table and chart
//! structures are scored only as themselves. Every considered type whose
//! gate passes produces a confidence, and the highest one wins (ties keep
//! the earlier type in the order above). A region that passes no gate comes
//! back as [`RegionType::Background`] with confidence 0.

mod options;
mod sampling;

pub use options::{
    ClassifierOptions, IconRule, ImageRule, LogoRule, OpenRange, TableConfidence, TextRule,
};
pub use sampling::{brightness_range, distinct_quantized_colors};

use crate::contour::Contour;
use crate::image::RasterImage;
use crate::lines::TableStructure;
use crate::types::{clamp_unit, CandidateRegion, Region, RegionType};
use log::trace;

/// How a region was found.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RegionEvidence {
    /// Flood-filled edge or color blob.
    Blob,
    /// Traced contour with its `points² / bbox area` compactness.
    Contour { compactness: f32 },
    /// Line grid with its spacing regularity in `[0, 1]`.
    Table { regularity: f32 },
    /// Horizontal/vertical axis pair.
    Chart,
}

impl RegionEvidence {
    fn candidate_types(&self) -> &'static [RegionType] {
        match self {
            RegionEvidence::Blob => &[RegionType::Text, RegionType::Image, RegionType::Icon],
            RegionEvidence::Contour { .. } => &[
                RegionType::Logo,
                RegionType::Text,
                RegionType::Image,
                RegionType::Icon,
            ],
            RegionEvidence::Table { .. } => &[RegionType::Table],
            RegionEvidence::Chart => &[RegionType::Chart],
        }
    }
}

/// Source image and rules shared by every classification in one run.
#[derive(Clone, Copy, Debug)]
pub struct ImageContext<'a> {
    pub image: &'a RasterImage,
    pub options: &'a ClassifierOptions,
}

impl<'a> ImageContext<'a> {
    pub fn new(image: &'a RasterImage, options: &'a ClassifierOptions) -> Self {
        Self { image, options }
    }
}

/// Pick the best-scoring type for `region`.
pub fn classify(region: Region, evidence: &RegionEvidence, ctx: &ImageContext<'_>) -> CandidateRegion {
    let mut best: Option<(RegionType, f32)> = None;
    for &kind in evidence.candidate_types() {
        let Some(conf) = score(kind, &region, evidence, ctx) else {
            continue;
        };
        let conf = clamp_unit(conf);
        if best.map_or(true, |(_, b)| conf > b) {
            best = Some((kind, conf));
        }
    }
    let (kind, conf) = best.unwrap_or((RegionType::Background, 0.0));
    trace!("classify {:?} {:?} -> {:?} {:.2}", region, evidence, kind, conf);
    CandidateRegion::new(region, kind, conf)
}

/// Classify a traced contour by its bounding box; `None` for contours with
/// fewer than `min_points` points.
pub fn classify_contour(
    contour: &Contour,
    min_points: usize,
    ctx: &ImageContext<'_>,
) -> Option<CandidateRegion> {
    if contour.len() < min_points {
        return None;
    }
    let bounds = contour.bounds()?;
    let evidence = RegionEvidence::Contour {
        compactness: contour.compactness(),
    };
    Some(classify(bounds, &evidence, ctx))
}

pub fn classify_table(table: &TableStructure, ctx: &ImageContext<'_>) -> CandidateRegion {
    let evidence = RegionEvidence::Table {
        regularity: table.regularity,
    };
    classify(table.region, &evidence, ctx)
}

fn score(
    kind: RegionType,
    region: &Region,
    evidence: &RegionEvidence,
    ctx: &ImageContext<'_>,
) -> Option<f32> {
    let opts = ctx.options;
    match kind {
        RegionType::Text => text_score(region, &opts.text),
        RegionType::Image => image_score(region, ctx.image, &opts.image),
        RegionType::Logo => match *evidence {
            RegionEvidence::Contour { compactness } => {
                logo_score(region, compactness, ctx.image, &opts.logo)
            }
            _ => None,
        },
        RegionType::Icon => icon_score(region, &opts.icon),
        RegionType::Table => match *evidence {
            RegionEvidence::Table { regularity } => Some(opts.table.confidence(regularity)),
            _ => None,
        },
        RegionType::Chart => {
            matches!(evidence, RegionEvidence::Chart).then_some(opts.chart_confidence)
        }
        RegionType::Background => None,
    }
}

fn text_score(region: &Region, rule: &TextRule) -> Option<f32> {
    let aspect = region.aspect_ratio();
    let area = region.area() as f32;
    if !rule.aspect.contains(aspect) || !rule.area.contains(area) {
        return None;
    }
    let mut conf = rule.base;
    if rule.strong_aspect.contains(aspect) {
        conf += rule.strong_aspect_bonus;
    }
    if rule.line_height.contains(region.height as f32) {
        conf += rule.line_height_bonus;
    }
    Some(conf)
}

fn image_score(region: &Region, image: &RasterImage, rule: &ImageRule) -> Option<f32> {
    let area = region.area() as f32;
    if !rule.aspect.contains(region.aspect_ratio()) || area <= rule.min_area {
        return None;
    }
    let mut conf = rule.base;
    if area > rule.large_area {
        conf += rule.large_area_bonus;
    }
    if distinct_quantized_colors(image, region, rule.samples_per_axis) > rule.distinct_colors {
        conf += rule.color_bonus;
    }
    Some(conf)
}

fn logo_score(region: &Region, compactness: f32, image: &RasterImage, rule: &LogoRule) -> Option<f32> {
    if compactness >= rule.max_compactness || !rule.area.contains(region.area() as f32) {
        return None;
    }
    let mut conf = rule.base;
    if brightness_range(image, region, rule.contrast_samples_per_axis) > rule.contrast_range {
        conf += rule.contrast_bonus;
    }
    let (_, height) = image.dimensions();
    if (region.y as f32) < rule.top_fraction * height as f32 {
        conf += rule.top_bonus;
    }
    Some(conf)
}

fn icon_score(region: &Region, rule: &IconRule) -> Option<f32> {
    let gate = rule.area.contains(region.area() as f32) && rule.aspect.contains(region.aspect_ratio());
    gate.then_some(rule.confidence)
}

#[cfg(test)]
mod tests;
