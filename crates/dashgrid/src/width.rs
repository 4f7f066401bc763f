//! Width and left-margin calculation for a cell within its row.
//!
//! All values are percentages of the row's width. Column gaps are subtracted
//! once per gap between cells before span units are converted to widths.

use serde::{Deserialize, Serialize};

use crate::partition::Row;
use crate::span::GRID_UNITS;

/// Width and left margin of a cell at one breakpoint, in percent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub width_percent: f64,
    pub margin_left_percent: f64,
}

/// Row width left for cells after the gaps between them.
pub fn available_width(cells_in_row: usize, column_gap: f64) -> f64 {
    100.0 - cells_in_row.saturating_sub(1) as f64 * column_gap
}

/// Width of a cell in `row`.
///
/// A specified span takes `span / 12` of the available width. An unspecified
/// span takes the row's fair share. The result never exceeds 100.
pub fn cell_width(row: &Row, span: Option<u32>, column_gap: f64) -> f64 {
    let units = match span {
        Some(span) => f64::from(span),
        None => row.fair_share(),
    };
    let available = available_width(row.len(), column_gap);
    (units / f64::from(GRID_UNITS) * available).min(100.0)
}

/// Left margin that realizes an offset of `offset_width` percent.
///
/// The offset is shrunk when the cell, its offset and one gap would not fit
/// in the row. Full-width cells never get a margin.
pub fn margin_left(width: f64, offset_width: Option<f64>, column_gap: f64) -> f64 {
    match offset_width {
        None => 0.0,
        Some(_) if width >= 100.0 => 0.0,
        Some(offset) if offset + width + column_gap > 100.0 => 100.0 - width,
        Some(offset) => offset + column_gap,
    }
}

/// Place a cell with resolved `span` and `offset_span` in `row`.
///
/// The offset is measured against the cell's own row, as if it were a cell
/// of that span sitting just before it.
pub fn place(row: &Row, span: Option<u32>, offset_span: Option<u32>, column_gap: f64) -> Placement {
    let width = cell_width(row, span, column_gap);
    let offset_width = offset_span.map(|offset| cell_width(row, Some(offset), column_gap));
    Placement {
        width_percent: width,
        margin_left_percent: margin_left(width, offset_width, column_gap),
    }
}
