//! Conversion of resolved pixel regions into named, padded,
//! percentage-space components.
use crate::types::{BoundingBox, CandidateRegion, NormalizedComponent, Region, RegionType};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperOptions {
    /// Pixels added on every side before normalization.
    pub padding_px: usize,
    /// Emit [`whole_image_component`] when no region survives.
    pub fallback_whole_image: bool,
}

impl Default for MapperOptions {
    fn default() -> Self {
        Self {
            padding_px: 10,
            fallback_whole_image: false,
        }
    }
}

pub fn category_label(kind: RegionType) -> &'static str {
    match kind {
        RegionType::Text => "Text Block",
        RegionType::Image => "Product Image",
        RegionType::Logo => "Brand Logo",
        RegionType::Chart => "Chart/Graph",
        RegionType::Table => "Data Table",
        RegionType::Icon => "Key Feature Icon",
        RegionType::Background => "Other Element",
    }
}

fn name_stem(kind: RegionType) -> &'static str {
    match kind {
        RegionType::Text => "Text Section",
        RegionType::Image => "Product Photo",
        RegionType::Logo => "Logo",
        RegionType::Chart => "Chart",
        RegionType::Table => "Table",
        RegionType::Icon => "Icon",
        RegionType::Background => "Region",
    }
}

fn description(kind: RegionType) -> &'static str {
    match kind {
        RegionType::Text => "Block of text such as a heading, paragraph or caption",
        RegionType::Image => "Photographic or illustrated product imagery",
        RegionType::Logo => "Compact high-contrast mark identifying a brand",
        RegionType::Chart => "Chart or graph drawn on perpendicular axes",
        RegionType::Table => "Tabular data laid out on a grid of rules",
        RegionType::Icon => "Small pictogram highlighting a feature",
        RegionType::Background => "Visual element without a specific role",
    }
}

/// Pad `region` by `padding` pixels, clip to the image and express it in
/// percent of `(width, height)`.
pub fn to_percent_box(region: &Region, dims: (usize, usize), padding: usize) -> BoundingBox {
    let (w, h) = dims;
    if w == 0 || h == 0 {
        return BoundingBox::default();
    }
    let x0 = region.x.saturating_sub(padding).min(w);
    let y0 = region.y.saturating_sub(padding).min(h);
    let x1 = region.right().saturating_add(padding).min(w).max(x0);
    let y1 = region.bottom().saturating_add(padding).min(h).max(y0);
    let sx = 100.0 / w as f32;
    let sy = 100.0 / h as f32;
    BoundingBox::clamped(
        x0 as f32 * sx,
        y0 as f32 * sy,
        (x1 - x0) as f32 * sx,
        (y1 - y0) as f32 * sy,
    )
}

pub fn to_component(
    candidate: &CandidateRegion,
    dims: (usize, usize),
    options: &MapperOptions,
) -> NormalizedComponent {
    let kind = candidate.kind();
    let r = candidate.region();
    NormalizedComponent {
        name: format!("{} {}x{}", name_stem(kind), r.width, r.height),
        description: description(kind).to_string(),
        category: category_label(kind).to_string(),
        bounding_box: to_percent_box(r, dims, options.padding_px),
    }
}

/// Map every candidate, preserving order.
pub fn to_components(
    regions: &[CandidateRegion],
    dims: (usize, usize),
    options: &MapperOptions,
) -> Vec<NormalizedComponent> {
    let mut out: Vec<NormalizedComponent> = regions
        .iter()
        .map(|c| to_component(c, dims, options))
        .collect();
    if out.is_empty() && options.fallback_whole_image {
        out.push(whole_image_component());
    }
    out
}

/// The whole image as a single component.
pub fn whole_image_component() -> NormalizedComponent {
    NormalizedComponent {
        name: "Full Image".to_string(),
        description: "Entire image, no distinct regions were found".to_string(),
        category: category_label(RegionType::Background).to_string(),
        bounding_box: BoundingBox::clamped(0.0, 0.0, 100.0, 100.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cand(kind: RegionType, r: Region) -> CandidateRegion {
        CandidateRegion::new(r, kind, 0.8)
    }

    #[test]
    fn labels_and_names() {
        let c = to_component(
            &cand(RegionType::Logo, Region::new(10, 10, 60, 40)),
            (200, 100),
            &MapperOptions::default(),
        );
        assert_eq!(c.category, "Brand Logo");
        assert_eq!(c.name, "Logo 60x40");
        assert!(!c.description.is_empty());
        assert_eq!(category_label(RegionType::Background), "Other Element");
        assert_eq!(category_label(RegionType::Chart), "Chart/Graph");
    }

    #[test]
    fn padding_is_applied_before_normalizing() {
        let b = to_percent_box(&Region::new(50, 50, 100, 100), (200, 200), 10);
        assert_eq!(b, BoundingBox::clamped(20.0, 20.0, 60.0, 60.0));
    }

    #[test]
    fn padding_is_clipped_at_image_edges() {
        let b = to_percent_box(&Region::new(0, 90, 100, 10), (100, 100), 10);
        assert_eq!(b.x, 0.0);
        assert_eq!(b.width, 100.0);
        assert_eq!(b.y, 80.0);
        assert!(b.y + b.height <= 100.0);
    }

    #[test]
    fn huge_regions_are_clipped_without_overflow() {
        let far = Region::new(usize::MAX - 5, usize::MAX - 5, 100, 100);
        let b = to_percent_box(&far, (100, 100), 10);
        assert_eq!(b, BoundingBox::clamped(100.0, 100.0, 0.0, 0.0));

        let wide = Region::new(90, 90, usize::MAX, usize::MAX);
        let b = to_percent_box(&wide, (100, 100), 10);
        assert_eq!(b, BoundingBox::clamped(80.0, 80.0, 20.0, 20.0));
    }

    #[test]
    fn zero_dimensions_give_empty_box() {
        let b = to_percent_box(&Region::new(0, 0, 10, 10), (0, 10), 10);
        assert_eq!(b, BoundingBox::default());
    }

    #[test]
    fn fallback_only_when_enabled_and_empty() {
        assert!(to_components(&[], (10, 10), &MapperOptions::default()).is_empty());
        let opts = MapperOptions {
            fallback_whole_image: true,
            ..MapperOptions::default()
        };
        let out = to_components(&[], (10, 10), &opts);
        assert_eq!(out, vec![whole_image_component()]);
        let one = to_components(
            &[cand(RegionType::Text, Region::new(0, 0, 5, 5))],
            (10, 10),
            &opts,
        );
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].category, "Text Block");
    }
}
