//! Rendering responsive styles as CSS media-query rules.
//!
//! Each breakpoint gets a rule scoped to its own width range, so the rules
//! never overlap and their order does not matter:
//!
//! ```text
//! @media (max-width: 575px) { .cell-0 { width: 100%; margin-left: 0%; } }
//! @media (min-width: 576px) and (max-width: 767px) { ... }
//! ...
//! @media (min-width: 1200px) { ... }
//! ```

use crate::breakpoint::{Breakpoint, Breakpoints};
use crate::cell::Cell;
use crate::responsive::ResponsiveStyle;

impl ResponsiveStyle {
    /// Render the style as one `@media` rule per breakpoint for `selector`.
    pub fn to_css(&self, selector: &str, table: &Breakpoints) -> String {
        let mut out = String::new();
        for (bp, placement) in self.iter() {
            out.push_str(&format!("@media {} {{\n", media_query(bp, table)));
            out.push_str(&format!(
                "  {} {{ width: {}%; margin-left: {}%; }}\n",
                selector,
                format_percent(placement.width_percent),
                format_percent(placement.margin_left_percent),
            ));
            out.push_str("}\n");
        }
        out
    }
}

/// Media query covering the widths at which `bp` is active.
pub fn media_query(bp: Breakpoint, table: &Breakpoints) -> String {
    let upper = bp
        .next()
        .map(|next| table.threshold(next).saturating_sub(1));
    match (bp, upper) {
        (Breakpoint::Xs, Some(max)) => format!("(max-width: {}px)", max),
        (_, Some(max)) => format!(
            "(min-width: {}px) and (max-width: {}px)",
            table.threshold(bp),
            max
        ),
        (_, None) => format!("(min-width: {}px)", table.threshold(bp)),
    }
}

/// Render styles for a whole cell list.
///
/// Each cell's selector is `.{prefix}-{key}`, falling back to its index when
/// it has no key. `styles` must be in the same order as `cells`.
pub fn render_stylesheet(
    cells: &[Cell],
    styles: &[ResponsiveStyle],
    prefix: &str,
    table: &Breakpoints,
) -> String {
    cells
        .iter()
        .zip(styles)
        .enumerate()
        .map(|(index, (cell, style))| {
            let selector = match &cell.key {
                Some(key) => format!(".{}-{}", prefix, key),
                None => format!(".{}-{}", prefix, index),
            };
            style.to_css(&selector, table)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a percentage with at most four decimals and no trailing zeros.
pub fn format_percent(value: f64) -> String {
    let formatted = format!("{:.4}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}
