//! Span and offset declarations, and their resolution at a breakpoint.
//!
//! Spans and offsets are measured in twelfths of a row. A declaration is either
//! a fixed number that applies at every width, or a per-breakpoint map that
//! picks a value based on the viewport width.

use serde::{Deserialize, Serialize};

use crate::breakpoint::{Breakpoint, Breakpoints};

/// Number of span units in a full row.
pub const GRID_UNITS: u32 = 12;

/// A span or offset declaration.
///
/// Serialized as a bare number for [`Span::Fixed`] and as a map with optional
/// `xs`..`xl` keys for [`Span::PerBreakpoint`]:
///
/// ```rust
/// use dashgrid::{BreakpointMap, Span};
///
/// let fixed: Span = serde_json::from_str("6").unwrap();
/// assert_eq!(fixed, Span::Fixed(6));
///
/// let responsive: Span = serde_json::from_str(r#"{"xs": 12, "md": 6}"#).unwrap();
/// assert_eq!(responsive, Span::from(BreakpointMap::new().xs(12).md(6)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Span {
    /// Same value at every breakpoint.
    Fixed(u32),
    /// Value chosen by viewport width.
    PerBreakpoint(BreakpointMap),
}

impl Span {
    /// Resolve the declaration for a viewport width.
    ///
    /// Returns `None` when nothing applies at this width, meaning the cell
    /// takes a fair share of its row. A zero value also resolves to `None`.
    pub fn resolve(&self, width: u32, table: &Breakpoints) -> Option<u32> {
        match self {
            Span::Fixed(n) => Some(*n).filter(|n| *n > 0),
            Span::PerBreakpoint(map) => map.resolve(width, table),
        }
    }

    /// True if this declaration resolves to the same value at every width.
    pub fn is_fixed(&self) -> bool {
        matches!(self, Span::Fixed(_))
    }
}

impl From<u32> for Span {
    fn from(n: u32) -> Self {
        Span::Fixed(n)
    }
}

impl From<BreakpointMap> for Span {
    fn from(map: BreakpointMap) -> Self {
        Span::PerBreakpoint(map)
    }
}

/// Resolve an optional declaration; absent declarations are unspecified.
pub fn resolve_span(spec: Option<&Span>, width: u32, table: &Breakpoints) -> Option<u32> {
    spec.and_then(|span| span.resolve(width, table))
}

/// Per-breakpoint values. Missing keys fall through to narrower entries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BreakpointMap {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xs: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sm: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub md: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lg: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xl: Option<u32>,
}

impl BreakpointMap {
    /// An empty map. Resolves to `None` everywhere.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `xs` value.
    pub fn xs(self, n: u32) -> Self {
        self.with(Breakpoint::Xs, n)
    }

    /// Set the `sm` value.
    pub fn sm(self, n: u32) -> Self {
        self.with(Breakpoint::Sm, n)
    }

    /// Set the `md` value.
    pub fn md(self, n: u32) -> Self {
        self.with(Breakpoint::Md, n)
    }

    /// Set the `lg` value.
    pub fn lg(self, n: u32) -> Self {
        self.with(Breakpoint::Lg, n)
    }

    /// Set the `xl` value.
    pub fn xl(self, n: u32) -> Self {
        self.with(Breakpoint::Xl, n)
    }

    /// Set the value for a breakpoint.
    pub fn with(mut self, bp: Breakpoint, n: u32) -> Self {
        *self.slot(bp) = Some(n);
        self
    }

    /// The value declared for exactly this breakpoint, if any.
    pub fn get(&self, bp: Breakpoint) -> Option<u32> {
        match bp {
            Breakpoint::Xs => self.xs,
            Breakpoint::Sm => self.sm,
            Breakpoint::Md => self.md,
            Breakpoint::Lg => self.lg,
            Breakpoint::Xl => self.xl,
        }
    }

    fn slot(&mut self, bp: Breakpoint) -> &mut Option<u32> {
        match bp {
            Breakpoint::Xs => &mut self.xs,
            Breakpoint::Sm => &mut self.sm,
            Breakpoint::Md => &mut self.md,
            Breakpoint::Lg => &mut self.lg,
            Breakpoint::Xl => &mut self.xl,
        }
    }

    /// Resolve the map for a viewport width.
    ///
    /// Entries from `xl` down to `sm` are tried first; the widest one whose
    /// threshold the width reaches wins. The `xs` entry applies only below the
    /// `sm` threshold. Zero entries count as absent.
    pub fn resolve(&self, width: u32, table: &Breakpoints) -> Option<u32> {
        const DESCENDING: [Breakpoint; 4] =
            [Breakpoint::Xl, Breakpoint::Lg, Breakpoint::Md, Breakpoint::Sm];

        let declared = |bp: Breakpoint| self.get(bp).filter(|n| *n > 0);

        DESCENDING
            .into_iter()
            .filter(|bp| table.threshold(*bp) <= width)
            .find_map(declared)
            .or_else(|| {
                declared(Breakpoint::Xs).filter(|_| width < table.threshold(Breakpoint::Sm))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Breakpoints {
        Breakpoints::default()
    }

    #[test]
    fn fixed_is_breakpoint_independent() {
        let span = Span::Fixed(4);
        for (_, px) in table().iter() {
            assert_eq!(span.resolve(px, &table()), Some(4));
        }
    }

    #[test]
    fn zero_resolves_unspecified() {
        assert_eq!(Span::Fixed(0).resolve(800, &table()), None);
        let map = BreakpointMap::new().sm(6).md(0);
        assert_eq!(map.resolve(800, &table()), Some(6));
    }

    #[test]
    fn absent_spec_is_unspecified() {
        assert_eq!(resolve_span(None, 1000, &table()), None);
    }

    #[test]
    fn map_xs_below_sm() {
        let span = Span::from(BreakpointMap::new().xs(12).md(6));
        assert_eq!(span.resolve(400, &table()), Some(12));
    }

    #[test]
    fn map_md_at_or_above_md() {
        let span = Span::from(BreakpointMap::new().xs(12).md(6));
        assert_eq!(span.resolve(900, &table()), Some(6));
        assert_eq!(span.resolve(768, &table()), Some(6));
        assert_eq!(span.resolve(1500, &table()), Some(6));
    }

    #[test]
    fn map_xs_does_not_cascade_past_sm() {
        // Between sm and md there is no applicable entry: xs stops at sm.
        let span = Span::from(BreakpointMap::new().xs(12).md(6));
        assert_eq!(span.resolve(600, &table()), None);
    }

    #[test]
    fn map_prefers_widest_reached_entry() {
        let map = BreakpointMap::new().sm(12).lg(4).xl(3);
        assert_eq!(map.resolve(600, &table()), Some(12));
        assert_eq!(map.resolve(800, &table()), Some(12));
        assert_eq!(map.resolve(1000, &table()), Some(4));
        assert_eq!(map.resolve(1200, &table()), Some(3));
    }

    #[test]
    fn map_respects_custom_table() {
        let custom = Breakpoints::builder().md(1000).lg(1100).build().unwrap();
        let map = BreakpointMap::new().sm(12).md(6);
        assert_eq!(map.resolve(900, &custom), Some(12));
        assert_eq!(map.resolve(1000, &custom), Some(6));
    }

    #[test]
    fn empty_map_resolves_unspecified() {
        assert_eq!(BreakpointMap::new().resolve(0, &table()), None);
        assert_eq!(BreakpointMap::new().resolve(2000, &table()), None);
    }

    #[test]
    fn span_serde_fixed() {
        let json = serde_json::to_string(&Span::Fixed(6)).unwrap();
        assert_eq!(json, "6");
    }

    #[test]
    fn span_serde_map_skips_absent_keys() {
        let span = Span::from(BreakpointMap::new().xs(12).md(6));
        let json = serde_json::to_string(&span).unwrap();
        assert_eq!(json, r#"{"xs":12,"md":6}"#);
    }

    #[test]
    fn span_serde_rejects_unknown_keys() {
        let result: Result<Span, _> = serde_json::from_str(r#"{"xxl": 3}"#);
        assert!(result.is_err());
    }

    #[test]
    fn span_serde_rejects_negative() {
        let result: Result<Span, _> = serde_json::from_str("-2");
        assert!(result.is_err());
    }

    #[test]
    fn span_from_yaml_map() {
        let span: Span = serde_yaml::from_str("xs: 12\nlg: 4\n").unwrap();
        assert_eq!(span, Span::from(BreakpointMap::new().xs(12).lg(4)));
        assert!(!span.is_fixed());
    }
}
