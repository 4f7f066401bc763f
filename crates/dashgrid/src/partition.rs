//! Row partitioning: splitting an ordered cell list into 12-unit rows.
//!
//! A single left-to-right scan accumulates resolved spans. Rules:
//!
//! - An unspecified span weighs `1` for boundary detection. This is only a
//!   placeholder; its rendered width is a fair share computed later.
//! - A span of 12 or more always sits alone. It closes the row before it, and
//!   the next row starts right after it.
//! - When the running sum hits exactly 12, the row closes including the
//!   current cell.
//! - When the running sum passes 12, the row closes before the current cell,
//!   which starts the next row carrying its own span.
//! - Whatever remains at the end of the list is a trailing row, which may be
//!   short.
//!
//! Partitions depend on the viewport width, since spans do.

use std::ops::Range;

use tracing::trace;

use crate::breakpoint::Breakpoints;
use crate::cell::Cell;
use crate::span::GRID_UNITS;

/// A run of consecutive cells that share a row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    start: usize,
    spans: Vec<Option<u32>>,
}

impl Row {
    /// Index of the first cell in the row.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Index of the last cell in the row (inclusive).
    pub fn end(&self) -> usize {
        self.start + self.spans.len() - 1
    }

    /// Half-open index range covered by the row.
    pub fn range(&self) -> Range<usize> {
        self.start..self.start + self.spans.len()
    }

    /// Number of cells in the row. Never zero.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Rows always hold at least one cell.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// True if the cell at `index` is part of this row.
    pub fn contains(&self, index: usize) -> bool {
        self.range().contains(&index)
    }

    /// Resolved spans of the row's cells, in order.
    pub fn spans(&self) -> &[Option<u32>] {
        &self.spans
    }

    /// Resolved span of the cell at a list index, if it belongs to this row.
    pub fn span_at(&self, index: usize) -> Option<Option<u32>> {
        index
            .checked_sub(self.start)
            .and_then(|offset| self.spans.get(offset).copied())
    }

    /// Sum of the specified spans in the row.
    pub fn specified_total(&self) -> u32 {
        self.spans.iter().flatten().sum()
    }

    /// Number of cells in the row without a specified span.
    pub fn unspecified_count(&self) -> usize {
        self.spans.iter().filter(|s| s.is_none()).count()
    }

    /// Span units given to each unspecified cell.
    ///
    /// The unclaimed budget is split equally. With no unspecified cells, or
    /// no budget left, the share is zero.
    pub fn fair_share(&self) -> f64 {
        let unspecified = self.unspecified_count();
        let remaining = f64::from(GRID_UNITS) - f64::from(self.specified_total());
        if unspecified == 0 || remaining <= 0.0 {
            return 0.0;
        }
        remaining / unspecified as f64
    }

    /// The slice of `cells` this row covers.
    pub fn cells<'a>(&self, cells: &'a [Cell]) -> &'a [Cell] {
        &cells[self.range()]
    }
}

/// All rows of a cell list at one viewport width.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RowPartition {
    rows: Vec<Row>,
}

impl RowPartition {
    /// Partition `cells` as laid out at viewport `width`.
    pub fn new(cells: &[Cell], width: u32, table: &Breakpoints) -> Self {
        let spans: Vec<Option<u32>> = cells
            .iter()
            .map(|cell| cell.resolved_span(width, table))
            .collect();
        let partition = Self::from_spans(&spans);
        trace!(width, cells = cells.len(), rows = partition.len(), "partitioned cells");
        partition
    }

    /// Partition a list of already resolved spans.
    pub fn from_spans(spans: &[Option<u32>]) -> Self {
        let rows = row_ranges(spans)
            .into_iter()
            .map(|range| {
                trace!(start = range.start, end = range.end, "row");
                Row {
                    start: range.start,
                    spans: spans[range].to_vec(),
                }
            })
            .collect();
        RowPartition { rows }
    }

    /// Rows in list order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True for an empty cell list.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The row containing the cell at `index`.
    pub fn row_of(&self, index: usize) -> Option<&Row> {
        // Rows are contiguous and sorted, so the first row ending past
        // `index` is the only candidate.
        let pos = self.rows.partition_point(|row| row.range().end <= index);
        self.rows.get(pos).filter(|row| row.contains(index))
    }
}

/// Find the row shared by the cell at `target`.
///
/// Returns `None` if `target` is out of range.
pub fn partition_row(cells: &[Cell], target: usize, width: u32, table: &Breakpoints) -> Option<Row> {
    RowPartition::new(cells, width, table).row_of(target).cloned()
}

#[derive(Default)]
struct Scan {
    rows: Vec<Range<usize>>,
    start: usize,
    sum: u32,
}

impl Scan {
    fn close(&mut self, end: usize) {
        if self.start < end {
            self.rows.push(self.start..end);
        }
    }
}

fn row_ranges(spans: &[Option<u32>]) -> Vec<Range<usize>> {
    let mut scan = spans
        .iter()
        .enumerate()
        .fold(Scan::default(), |mut scan, (i, span)| {
            match *span {
                Some(full) if full >= GRID_UNITS => {
                    scan.close(i);
                    scan.rows.push(i..i + 1);
                    scan.start = i + 1;
                    scan.sum = 0;
                }
                span => {
                    let weight = span.unwrap_or(1);
                    scan.sum += weight;
                    if scan.sum == GRID_UNITS {
                        scan.close(i + 1);
                        scan.start = i + 1;
                        scan.sum = 0;
                    } else if scan.sum > GRID_UNITS {
                        scan.close(i);
                        scan.start = i;
                        scan.sum = weight;
                    }
                }
            }
            scan
        });
    scan.close(spans.len());
    scan.rows
}
