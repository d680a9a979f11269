use super::options::LineOptions;
use super::table::TableStructure;
use crate::types::Region;
use log::debug;

/// Move L-shaped axis pairs out of the table set.
///
/// A structure qualifies when it holds exactly one horizontal and one
/// vertical line, the vertical line's bottom end meets the horizontal line's
/// left end within `corner_tolerance_px`, and both sides exceed
/// `min_chart_extent`. Returns `(tables, chart_regions)`.
pub fn split_chart_axes(
    structures: Vec<TableStructure>,
    options: &LineOptions,
) -> (Vec<TableStructure>, Vec<Region>) {
    let mut tables = Vec::with_capacity(structures.len());
    let mut charts = Vec::new();
    for s in structures {
        if is_axis_pair(&s, options) {
            charts.push(s.region);
        } else {
            tables.push(s);
        }
    }
    debug!("split_chart_axes: {} tables, {} charts", tables.len(), charts.len());
    (tables, charts)
}

fn is_axis_pair(s: &TableStructure, options: &LineOptions) -> bool {
    let ([h], [v]) = (s.horizontals.as_slice(), s.verticals.as_slice()) else {
        return false;
    };
    let tol = options.corner_tolerance_px;
    let meets_left_end = v.x.abs_diff(h.x) <= tol;
    let meets_bottom_end = v.bottom().abs_diff(h.y + 1) <= tol;
    meets_left_end
        && meets_bottom_end
        && s.region.width > options.min_chart_extent
        && s.region.height > options.min_chart_extent
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lines::{find_table_structures, HorizontalLine, VerticalLine};

    #[test]
    fn l_shaped_axes_become_chart() {
        let h = [HorizontalLine { x: 50, y: 249, width: 300 }];
        let v = [VerticalLine { x: 50, y: 50, height: 200 }];
        let options = LineOptions::default();
        let (tables, charts) = split_chart_axes(find_table_structures(&h, &v, &options), &options);
        assert!(tables.is_empty());
        assert_eq!(charts, vec![Region::new(50, 50, 300, 200)]);
    }

    #[test]
    fn crossing_lines_stay_a_table() {
        let h = [HorizontalLine { x: 0, y: 5, width: 60 }];
        let v = [VerticalLine { x: 5, y: 0, height: 60 }];
        let options = LineOptions::default();
        let (tables, charts) = split_chart_axes(find_table_structures(&h, &v, &options), &options);
        assert_eq!(tables.len(), 1);
        assert!(charts.is_empty());
    }
}
