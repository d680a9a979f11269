//! Overlap-based deduplication of candidate regions.
//!
//! Overlap between two boxes is `intersection / min(area_a, area_b)`, so a
//! box fully inside a larger one scores 1.0. [`resolve`] walks candidates in
//! descending confidence and keeps a set in which no pair overlaps above the
//! dedup threshold. [`merge_external`] combines an externally produced
//! component list with heuristic components, keeping the external list as
//! the base.
use crate::types::{BoundingBox, CandidateRegion, NormalizedComponent, Region};
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlapOptions {
    /// Two candidates overlapping strictly above this conflict.
    pub dedup_threshold: f32,
    /// Heuristic components overlapping an external one strictly above this
    /// are dropped during the merge.
    pub external_threshold: f32,
}

impl Default for OverlapOptions {
    fn default() -> Self {
        Self {
            dedup_threshold: 0.3,
            external_threshold: 0.5,
        }
    }
}

/// `intersection / min(area)`; identical regions score 1.0, empty ones 0.
pub fn overlap_ratio(a: &Region, b: &Region) -> f32 {
    if a == b {
        return 1.0;
    }
    let min_area = a.area().min(b.area());
    if min_area == 0 {
        return 0.0;
    }
    a.intersection_area(b) as f32 / min_area as f32
}

/// Same ratio on percentage boxes.
pub fn percent_overlap_ratio(a: &BoundingBox, b: &BoundingBox) -> f32 {
    if a == b {
        return 1.0;
    }
    let w = (a.x + a.width).min(b.x + b.width) - a.x.max(b.x);
    let h = (a.y + a.height).min(b.y + b.height) - a.y.max(b.y);
    let min_area = (a.width * a.height).min(b.width * b.height);
    if w <= 0.0 || h <= 0.0 || min_area.is_nan() || min_area <= 0.0 {
        return 0.0;
    }
    let ratio = w * h / min_area;
    if ratio.is_finite() {
        ratio.min(1.0)
    } else {
        0.0
    }
}

/// Deduplicate with the default threshold of 0.3.
pub fn resolve(regions: Vec<CandidateRegion>) -> Vec<CandidateRegion> {
    resolve_with(regions, OverlapOptions::default().dedup_threshold)
}

/// Greedy deduplication.
///
/// Candidates are visited in descending confidence (stable, so equal
/// confidences keep input order). A candidate without conflicts is accepted.
/// One that conflicts with accepted regions replaces all of them when it
/// beats each one, by higher confidence or larger area, and is discarded
/// otherwise. The result is sorted by descending confidence.
pub fn resolve_with(mut regions: Vec<CandidateRegion>, threshold: f32) -> Vec<CandidateRegion> {
    let input = regions.len();
    regions.sort_by(|a, b| b.confidence().total_cmp(&a.confidence()));

    let mut accepted: Vec<CandidateRegion> = Vec::with_capacity(regions.len());
    let mut replaced = 0usize;
    for cand in regions {
        let conflicts: Vec<usize> = accepted
            .iter()
            .enumerate()
            .filter(|(_, acc)| overlap_ratio(cand.region(), acc.region()) > threshold)
            .map(|(i, _)| i)
            .collect();
        if conflicts.is_empty() {
            accepted.push(cand);
            continue;
        }
        let wins = conflicts.iter().all(|&i| beats(&cand, &accepted[i]));
        if wins {
            replaced += conflicts.len();
            for &i in conflicts.iter().rev() {
                accepted.remove(i);
            }
            accepted.push(cand);
        }
    }

    accepted.sort_by(|a, b| b.confidence().total_cmp(&a.confidence()));
    debug!(
        "resolve threshold={:.2} in={} kept={} replaced={}",
        threshold,
        input,
        accepted.len(),
        replaced
    );
    accepted
}

fn beats(cand: &CandidateRegion, acc: &CandidateRegion) -> bool {
    cand.confidence() > acc.confidence() || cand.region().area() > acc.region().area()
}

/// Keep `base` and append each `extra` item that overlaps no base item
/// strictly above `threshold`.
fn merge_onto<T>(
    base: Vec<T>,
    extra: Vec<T>,
    threshold: f32,
    ratio: impl Fn(&T, &T) -> f32,
) -> Vec<T> {
    let base_len = base.len();
    let mut out = base;
    for item in extra {
        if out[..base_len].iter().all(|b| ratio(b, &item) <= threshold) {
            out.push(item);
        }
    }
    out
}

/// Merge externally detected components (percentage boxes) with heuristic
/// ones. The external list is kept as is.
pub fn merge_external(
    external: Vec<NormalizedComponent>,
    heuristic: Vec<NormalizedComponent>,
    threshold: f32,
) -> Vec<NormalizedComponent> {
    let (n_ext, n_heur) = (external.len(), heuristic.len());
    let merged = merge_onto(external, heuristic, threshold, |a, b| {
        percent_overlap_ratio(&a.bounding_box, &b.bounding_box)
    });
    debug!(
        "merge_external external={} heuristic={} added={}",
        n_ext,
        n_heur,
        merged.len() - n_ext
    );
    merged
}

/// Pixel-space counterpart of [`merge_external`] for two candidate sets.
pub fn merge_candidates(
    base: Vec<CandidateRegion>,
    extra: Vec<CandidateRegion>,
    threshold: f32,
) -> Vec<CandidateRegion> {
    merge_onto(base, extra, threshold, |a, b| {
        overlap_ratio(a.region(), b.region())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RegionType;

    fn cand(x: usize, y: usize, w: usize, h: usize, conf: f32) -> CandidateRegion {
        CandidateRegion::new(Region::new(x, y, w, h), RegionType::Image, conf)
    }

    fn component(name: &str, x: f32, y: f32, w: f32, h: f32) -> NormalizedComponent {
        NormalizedComponent {
            name: name.to_string(),
            description: String::new(),
            category: "Other Element".to_string(),
            bounding_box: BoundingBox::clamped(x, y, w, h),
        }
    }

    #[test]
    fn ratio_uses_smaller_area() {
        let big = Region::new(0, 0, 100, 100);
        let inner = Region::new(10, 10, 20, 20);
        assert_eq!(overlap_ratio(&big, &inner), 1.0);
        let half = Region::new(50, 0, 100, 100);
        assert!((overlap_ratio(&big, &half) - 0.5).abs() < 1e-6);
        assert_eq!(overlap_ratio(&big, &Region::new(200, 200, 5, 5)), 0.0);
    }

    #[test]
    fn self_overlap_is_one_even_when_empty() {
        let r = Region::new(3, 3, 0, 0);
        assert_eq!(overlap_ratio(&r, &r), 1.0);
        assert_eq!(overlap_ratio(&r, &Region::new(0, 0, 10, 10)), 0.0);
    }

    #[test]
    fn identical_bounds_keep_higher_confidence() {
        let out = resolve(vec![cand(10, 10, 50, 50, 0.4), cand(10, 10, 50, 50, 0.9)]);
        assert_eq!(out.len(), 1);
        assert!((out[0].confidence() - 0.9).abs() < 1e-6);
    }

    #[test]
    fn larger_lower_confidence_candidate_replaces() {
        let out = resolve(vec![cand(10, 10, 20, 20, 0.9), cand(0, 0, 100, 100, 0.6)]);
        assert_eq!(out.len(), 1);
        assert_eq!(*out[0].region(), Region::new(0, 0, 100, 100));
    }

    #[test]
    fn smaller_lower_confidence_candidate_is_dropped() {
        let out = resolve(vec![cand(0, 0, 100, 100, 0.9), cand(10, 10, 20, 20, 0.6)]);
        assert_eq!(out.len(), 1);
        assert_eq!(*out[0].region(), Region::new(0, 0, 100, 100));
    }

    #[test]
    fn candidate_must_beat_every_conflict() {
        // The strip is larger than the left square but not the right one.
        let out = resolve(vec![
            cand(0, 0, 40, 40, 0.9),
            cand(100, 0, 100, 100, 0.9),
            cand(0, 0, 150, 20, 0.5),
        ]);
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|c| c.confidence() > 0.8));
    }

    #[test]
    fn disjoint_candidates_all_survive_sorted() {
        let out = resolve(vec![
            cand(0, 0, 10, 10, 0.2),
            cand(20, 0, 10, 10, 0.8),
            cand(40, 0, 10, 10, 0.5),
        ]);
        let confs: Vec<f32> = out.iter().map(|c| c.confidence()).collect();
        assert_eq!(confs, vec![0.8, 0.5, 0.2]);
    }

    #[test]
    fn equal_confidence_keeps_input_order() {
        let a = cand(0, 0, 10, 10, 0.7);
        let b = cand(20, 0, 10, 10, 0.7);
        assert_eq!(resolve(vec![a, b]), vec![a, b]);
        assert_eq!(resolve(vec![b, a]), vec![b, a]);
    }

    #[test]
    fn resolve_is_idempotent_on_chain() {
        let input = vec![
            cand(0, 0, 50, 50, 0.9),
            cand(30, 0, 50, 50, 0.8),
            cand(60, 0, 50, 50, 0.7),
            cand(0, 0, 200, 200, 0.1),
        ];
        let once = resolve(input);
        let twice = resolve(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn external_list_is_kept_as_base() {
        let external = vec![component("Logo", 0.0, 0.0, 20.0, 20.0)];
        let heuristic = vec![
            component("dup", 5.0, 5.0, 10.0, 10.0),
            component("new", 50.0, 50.0, 10.0, 10.0),
            component("edge", 15.0, 15.0, 10.0, 10.0),
        ];
        let merged = merge_external(external, heuristic, 0.5);
        let names: Vec<&str> = merged.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Logo", "new", "edge"]);
    }

    #[test]
    fn heuristic_items_are_not_checked_against_each_other() {
        let merged = merge_candidates(
            vec![],
            vec![cand(0, 0, 10, 10, 0.5), cand(0, 0, 10, 10, 0.5)],
            0.5,
        );
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn percent_ratio_guards_degenerate_boxes() {
        let a = BoundingBox::clamped(10.0, 10.0, 0.0, 5.0);
        let b = BoundingBox::clamped(0.0, 0.0, 50.0, 50.0);
        assert_eq!(percent_overlap_ratio(&a, &b), 0.0);
        assert_eq!(percent_overlap_ratio(&b, &b), 1.0);
    }
}
