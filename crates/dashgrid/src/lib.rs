//! # dashgrid - Responsive 12-Column Grid Packing
//!
//! `dashgrid` computes the width and left margin of every cell in a
//! responsive 12-unit grid, at each of five breakpoints. It is the layout core
//! behind Grid/Row/Column dashboard components, independent of any UI toolkit.
//!
//! ## Core Concepts
//!
//! - [`Cell`]: a row participant with an optional [`Span`] and offset
//! - [`Span`]: a fixed number of twelfths, or a [`BreakpointMap`] of them
//! - [`Breakpoints`]: pixel thresholds for `xs`..`xl`
//! - [`RowPartition`]: the rows a cell list packs into at one width
//! - [`ResponsiveStyle`]: a cell's [`Placement`] at every breakpoint
//!
//! ## Quick Start
//!
//! ```rust
//! use dashgrid::{BreakpointMap, Cell, GridConfig};
//!
//! let cells = vec![
//!     Cell::new(8).key("chart"),
//!     Cell::new(4).key("legend"),
//!     Cell::new(BreakpointMap::new().xs(12).md(6)).key("table"),
//!     Cell::auto().key("notes"),
//! ];
//!
//! let config = GridConfig::default().column_gap(2.0);
//! let styles = config.layout(&cells);
//!
//! // 8 + 4 fill the first row: 100% minus one 2% gap, split 2:1.
//! let chart = styles[0].md;
//! assert!((chart.width_percent - 8.0 / 12.0 * 98.0).abs() < 1e-9);
//! ```
//!
//! ## Packing Rules
//!
//! Cells are scanned left to right and packed into rows of 12 units. A cell
//! without a span counts as one unit while packing, then receives an equal
//! share of whatever its row leaves unclaimed. Spans of 12 or more always sit
//! alone. A cell that would push a row past 12 starts the next row. See
//! [`partition`] for the full rules.
//!
//! ## Offsets
//!
//! An offset is leading empty space, measured in the same units as spans and
//! against the cell's own row. It becomes a left margin that is clamped so
//! the cell never overflows its row:
//!
//! ```rust
//! use dashgrid::{Breakpoints, Cell, compute_responsive_style};
//!
//! let cells = vec![Cell::new(6).offset(3)];
//! let style = compute_responsive_style(&cells, 0, 2.0, &Breakpoints::default()).unwrap();
//! assert!((style.lg.margin_left_percent - 27.0).abs() < 1e-9);
//! ```
//!
//! ## CSS Output
//!
//! [`ResponsiveStyle::to_css`] renders non-overlapping `@media` rules, one
//! per breakpoint range.

mod breakpoint;
mod cell;
mod config;
mod css;
mod error;
pub mod partition;
mod responsive;
mod span;
mod width;

pub use breakpoint::{Breakpoint, Breakpoints, BreakpointsBuilder};
pub use cell::Cell;
pub use config::{GridConfig, LayoutDocument};
pub use css::{format_percent, media_query, render_stylesheet};
pub use error::{GridError, Result};
pub use partition::{partition_row, Row, RowPartition};
pub use responsive::{compute_responsive_style, layout, ResponsiveStyle};
pub use span::{resolve_span, BreakpointMap, Span, GRID_UNITS};
pub use width::{available_width, cell_width, margin_left, place, Placement};
