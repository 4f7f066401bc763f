//! Per-breakpoint aggregation of cell placements.
//!
//! Each breakpoint is laid out independently at its own threshold width:
//! spans are resolved, the list is partitioned into rows, and every cell is
//! placed within its row. Nothing is shared between breakpoints, so changing a
//! cell's `xs` span never affects its `md` placement.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::breakpoint::{Breakpoint, Breakpoints};
use crate::cell::Cell;
use crate::config::GridConfig;
use crate::partition::RowPartition;
use crate::width::{place, Placement};

/// A cell's placement at every breakpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponsiveStyle {
    pub xs: Placement,
    pub sm: Placement,
    pub md: Placement,
    pub lg: Placement,
    pub xl: Placement,
}

impl ResponsiveStyle {
    /// Placement at a breakpoint.
    pub fn get(&self, bp: Breakpoint) -> Placement {
        match bp {
            Breakpoint::Xs => self.xs,
            Breakpoint::Sm => self.sm,
            Breakpoint::Md => self.md,
            Breakpoint::Lg => self.lg,
            Breakpoint::Xl => self.xl,
        }
    }

    /// Placement in effect at a viewport width.
    pub fn at_width(&self, width: u32, table: &Breakpoints) -> Placement {
        self.get(table.classify(width))
    }

    /// `(breakpoint, placement)` pairs in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (Breakpoint, Placement)> + '_ {
        Breakpoint::ALL.into_iter().map(move |bp| (bp, self.get(bp)))
    }

    fn from_array(placements: [Placement; 5]) -> Self {
        let [xs, sm, md, lg, xl] = placements;
        ResponsiveStyle { xs, sm, md, lg, xl }
    }
}

/// Compute the responsive style of the cell at `target`.
///
/// Returns `None` if `target` is out of range.
#[tracing::instrument(level = "trace", skip(cells, table), fields(cells = cells.len()))]
pub fn compute_responsive_style(
    cells: &[Cell],
    target: usize,
    column_gap: f64,
    table: &Breakpoints,
) -> Option<ResponsiveStyle> {
    let cell = cells.get(target)?;
    let mut placements = [Placement::default(); 5];
    for (slot, bp) in placements.iter_mut().zip(Breakpoint::ALL) {
        let width = table.threshold(bp);
        let partition = RowPartition::new(cells, width, table);
        let row = partition.row_of(target)?;
        let span = row.span_at(target)?;
        *slot = place(row, span, cell.resolved_offset(width, table), column_gap);
    }
    Some(ResponsiveStyle::from_array(placements))
}

/// Compute the responsive style of every cell, in list order.
///
/// Equivalent to calling [`compute_responsive_style`] for each index, but
/// partitions the list once per breakpoint.
#[tracing::instrument(level = "trace", skip(cells, table), fields(cells = cells.len()))]
pub fn layout(cells: &[Cell], column_gap: f64, table: &Breakpoints) -> Vec<ResponsiveStyle> {
    let mut placements = vec![[Placement::default(); 5]; cells.len()];
    for (i, bp) in Breakpoint::ALL.into_iter().enumerate() {
        let width = table.threshold(bp);
        let partition = RowPartition::new(cells, width, table);
        for row in partition.rows() {
            for (index, span) in row.range().zip(row.spans().iter().copied()) {
                let offset = cells[index].resolved_offset(width, table);
                placements[index][i] = place(row, span, offset, column_gap);
            }
        }
        debug!(breakpoint = %bp, width, rows = partition.len(), "laid out breakpoint");
    }
    placements.into_iter().map(ResponsiveStyle::from_array).collect()
}

impl GridConfig {
    /// Responsive style of the cell at `target` under this configuration.
    pub fn style_for(&self, cells: &[Cell], target: usize) -> Option<ResponsiveStyle> {
        compute_responsive_style(cells, target, self.column_gap, &self.breakpoints)
    }

    /// Responsive style of the first cell whose key is `key`.
    pub fn style_for_key(&self, cells: &[Cell], key: &str) -> Option<ResponsiveStyle> {
        let target = cells
            .iter()
            .position(|cell| cell.key.as_deref() == Some(key))?;
        self.style_for(cells, target)
    }

    /// Responsive styles of all cells under this configuration.
    pub fn layout(&self, cells: &[Cell]) -> Vec<ResponsiveStyle> {
        layout(cells, self.column_gap, &self.breakpoints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::BreakpointMap;

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn empty_list_has_no_styles() {
        assert!(layout(&[], 0.0, &Breakpoints::default()).is_empty());
        assert!(compute_responsive_style(&[], 0, 0.0, &Breakpoints::default()).is_none());
    }

    #[test]
    fn three_auto_cells_third_everywhere() {
        let cells = vec![Cell::auto(), Cell::auto(), Cell::auto()];
        for style in layout(&cells, 0.0, &Breakpoints::default()) {
            for (_, placement) in style.iter() {
                assert!(close(placement.width_percent, 100.0 / 3.0));
                assert_eq!(placement.margin_left_percent, 0.0);
            }
        }
    }

    #[test]
    fn four_sixes_make_two_half_rows() {
        let cells = vec![Cell::new(6); 4];
        let styles = layout(&cells, 0.0, &Breakpoints::default());
        for style in &styles {
            assert!(close(style.lg.width_percent, 50.0));
        }
    }

    #[test]
    fn full_span_isolated_between_sixes() {
        let cells = vec![Cell::new(6), Cell::new(12), Cell::new(6)];
        let styles = layout(&cells, 2.0, &Breakpoints::default());
        // Each sits alone, so no gap is subtracted.
        assert!(close(styles[0].md.width_percent, 50.0));
        assert!(close(styles[1].md.width_percent, 100.0));
        assert!(close(styles[2].md.width_percent, 50.0));
    }

    #[test]
    fn offset_in_single_cell_row() {
        let cells = vec![Cell::new(6).offset(3)];
        let style = compute_responsive_style(&cells, 0, 2.0, &Breakpoints::default()).unwrap();
        for (_, placement) in style.iter() {
            assert!(close(placement.width_percent, 50.0));
            assert!(close(placement.margin_left_percent, 27.0));
        }
    }

    #[test]
    fn responsive_span_changes_by_breakpoint() {
        let cells = vec![
            Cell::new(BreakpointMap::new().xs(12).md(6)),
            Cell::new(BreakpointMap::new().xs(12).md(6)),
        ];
        let style = compute_responsive_style(&cells, 0, 0.0, &Breakpoints::default()).unwrap();
        assert!(close(style.xs.width_percent, 100.0));
        // Between sm and md nothing applies, so both cells share the row.
        assert!(close(style.sm.width_percent, 50.0));
        assert!(close(style.md.width_percent, 50.0));
        assert!(close(style.xl.width_percent, 50.0));
    }

    #[test]
    fn layout_matches_single_target() {
        let cells = vec![
            Cell::new(4).offset(2),
            Cell::auto(),
            Cell::new(BreakpointMap::new().xs(12).lg(3)),
            Cell::new(9).offset(BreakpointMap::new().sm(1)),
            Cell::auto(),
        ];
        let table = Breakpoints::default();
        let all = layout(&cells, 1.5, &table);
        for (i, style) in all.iter().enumerate() {
            assert_eq!(Some(*style), compute_responsive_style(&cells, i, 1.5, &table));
        }
    }

    #[test]
    fn at_width_picks_active_breakpoint() {
        let cells = vec![Cell::new(BreakpointMap::new().xs(12).lg(4))];
        let table = Breakpoints::default();
        let style = compute_responsive_style(&cells, 0, 0.0, &table).unwrap();
        assert!(close(style.at_width(320, &table).width_percent, 100.0));
        assert!(close(style.at_width(1024, &table).width_percent, 100.0 / 3.0));
    }

    #[test]
    fn config_lookup_by_key() {
        let config = GridConfig::default().column_gap(2.0);
        let cells = vec![Cell::new(8).key("main"), Cell::new(4).key("side")];
        let style = config.style_for_key(&cells, "side").unwrap();
        assert!(close(style.md.width_percent, 4.0 / 12.0 * 98.0));
        assert!(config.style_for_key(&cells, "missing").is_none());
    }

    #[test]
    fn style_serializes_by_breakpoint_name() {
        let cells = vec![Cell::new(12)];
        let styles = GridConfig::default().layout(&cells);
        let value = serde_json::to_value(styles[0]).unwrap();
        assert_eq!(value["xl"]["widthPercent"], 100.0);
        assert_eq!(value["xs"]["marginLeftPercent"], 0.0);
    }
}
