use super::options::LineOptions;
use super::{intersects, HorizontalLine, VerticalLine};
use crate::types::Region;
use log::debug;
use serde::Serialize;

/// Table candidate assembled from ruling lines.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableStructure {
    pub region: Region,
    pub horizontals: Vec<HorizontalLine>,
    pub verticals: Vec<VerticalLine>,
    /// Spacing regularity of the member lines in `[0, 1]`, 1 for an even grid.
    pub regularity: f32,
}

/// Expand every crossing (h, v) pair into a table candidate.
///
/// Starting from the union of the pair, lines within `proximity_px` of the
/// current bounds whose orthogonal extent overlaps it are merged in until
/// nothing changes. The union is kept only when both sides exceed
/// `min_table_extent`. Crossings already inside an accepted table are
/// skipped, so each table is reported once.
pub fn find_table_structures(
    h_lines: &[HorizontalLine],
    v_lines: &[VerticalLine],
    options: &LineOptions,
) -> Vec<TableStructure> {
    let mut tables: Vec<TableStructure> = Vec::new();
    for h in h_lines {
        for v in v_lines {
            if !intersects(h, v) {
                continue;
            }
            if tables.iter().any(|t| t.region.contains_point(v.x, h.y)) {
                continue;
            }
            let (region, h_members, v_members) = expand(h, v, h_lines, v_lines, options.proximity_px);
            if region.width <= options.min_table_extent || region.height <= options.min_table_extent {
                continue;
            }
            let horizontals: Vec<HorizontalLine> = h_members.iter().map(|&i| h_lines[i]).collect();
            let verticals: Vec<VerticalLine> = v_members.iter().map(|&i| v_lines[i]).collect();
            let regularity = 0.5
                * (spacing_regularity(horizontals.iter().map(|l| l.y).collect())
                    + spacing_regularity(verticals.iter().map(|l| l.x).collect()));
            tables.push(TableStructure {
                region,
                horizontals,
                verticals,
                regularity,
            });
        }
    }
    debug!(
        "find_table_structures: {} h, {} v -> {} tables",
        h_lines.len(),
        v_lines.len(),
        tables.len()
    );
    tables
}

fn expand(
    h: &HorizontalLine,
    v: &VerticalLine,
    h_lines: &[HorizontalLine],
    v_lines: &[VerticalLine],
    tol: usize,
) -> (Region, Vec<usize>, Vec<usize>) {
    let mut region = h.bounds().union(&v.bounds());
    let mut h_in = vec![false; h_lines.len()];
    let mut v_in = vec![false; v_lines.len()];
    let mut changed = true;
    while changed {
        changed = false;
        for (i, other) in h_lines.iter().enumerate() {
            if h_in[i] {
                continue;
            }
            let near = other.y + tol >= region.y && other.y <= region.bottom() + tol;
            let overlaps = other.x <= region.right() && other.right() >= region.x;
            if near && overlaps {
                h_in[i] = true;
                region = region.union(&other.bounds());
                changed = true;
            }
        }
        for (i, other) in v_lines.iter().enumerate() {
            if v_in[i] {
                continue;
            }
            let near = other.x + tol >= region.x && other.x <= region.right() + tol;
            let overlaps = other.y <= region.bottom() && other.bottom() >= region.y;
            if near && overlaps {
                v_in[i] = true;
                region = region.union(&other.bounds());
                changed = true;
            }
        }
    }
    let members = |flags: Vec<bool>| -> Vec<usize> {
        flags
            .into_iter()
            .enumerate()
            .filter_map(|(i, f)| f.then_some(i))
            .collect()
    };
    (region, members(h_in), members(v_in))
}

/// `1 - cv` of the gaps between distinct positions, clamped to `[0, 1]`.
/// Fewer than two gaps carry no evidence and score a neutral 0.5.
fn spacing_regularity(mut positions: Vec<usize>) -> f32 {
    positions.sort_unstable();
    positions.dedup();
    let gaps: Vec<f32> = positions
        .windows(2)
        .map(|w| (w[1] - w[0]) as f32)
        .collect();
    if gaps.len() < 2 {
        return 0.5;
    }
    let n = gaps.len() as f32;
    let mean = gaps.iter().sum::<f32>() / n;
    if mean <= 0.0 {
        return 0.0;
    }
    let var = gaps.iter().map(|g| (g - mean) * (g - mean)).sum::<f32>() / n;
    (1.0 - var.sqrt() / mean).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hl(x: usize, y: usize, width: usize) -> HorizontalLine {
        HorizontalLine { x, y, width }
    }

    fn vl(x: usize, y: usize, height: usize) -> VerticalLine {
        VerticalLine { x, y, height }
    }

    #[test]
    fn crossing_pair_forms_one_table() {
        let h = [hl(0, 5, 60)];
        let v = [vl(5, 0, 60)];
        let tables = find_table_structures(&h, &v, &LineOptions::default());
        assert_eq!(tables.len(), 1);
        let r = tables[0].region;
        assert!(r.x <= 0 && r.right() >= 60 && r.y <= 0 && r.bottom() >= 60, "{r:?}");
        assert_eq!(tables[0].horizontals, h.to_vec());
        assert_eq!(tables[0].verticals, v.to_vec());
    }

    #[test]
    fn small_union_is_rejected() {
        let options = LineOptions {
            min_table_extent: 100,
            ..Default::default()
        };
        let tables = find_table_structures(&[hl(0, 5, 60)], &[vl(5, 0, 60)], &options);
        assert!(tables.is_empty());
    }

    #[test]
    fn disjoint_lines_form_no_table() {
        let tables = find_table_structures(
            &[hl(0, 5, 60)],
            &[vl(200, 100, 60)],
            &LineOptions::default(),
        );
        assert!(tables.is_empty());
    }

    #[test]
    fn grid_merges_into_single_regular_table() {
        let h: Vec<_> = (0..4).map(|i| hl(100, 100 + i * 40, 200)).collect();
        let v: Vec<_> = (0..5).map(|i| vl(100 + i * 50, 100, 121)).collect();
        let tables = find_table_structures(&h, &v, &LineOptions::default());
        assert_eq!(tables.len(), 1);
        let t = &tables[0];
        assert_eq!(t.region, Region::new(100, 100, 201, 121));
        assert_eq!(t.horizontals.len(), 4);
        assert_eq!(t.verticals.len(), 5);
        assert!((t.regularity - 1.0).abs() < 1e-6, "regularity={}", t.regularity);
    }

    #[test]
    fn far_lines_are_not_merged() {
        let h = [hl(0, 10, 120), hl(0, 400, 120)];
        let v = [vl(10, 0, 120)];
        let tables = find_table_structures(&h, &v, &LineOptions::default());
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].horizontals.len(), 1);
    }

    #[test]
    fn irregular_spacing_scores_lower() {
        assert!((spacing_regularity(vec![0, 10, 20, 30]) - 1.0).abs() < 1e-6);
        assert!(spacing_regularity(vec![0, 2, 40, 42]) < 0.5);
        assert_eq!(spacing_regularity(vec![0, 10]), 0.5);
    }
}
