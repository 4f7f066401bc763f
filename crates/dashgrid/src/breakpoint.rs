//! Named breakpoints and the pixel thresholds that define them.
//!
//! A [`Breakpoints`] table always holds all five thresholds in strictly
//! increasing order. Overrides are merged per key over the defaults when the
//! table is built, so a partially specified table is never observable.

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

/// Responsive breakpoint tiers, ordered from narrowest to widest.
///
/// | Breakpoint | Default threshold |
/// |-----------|-------------------|
/// | `Xs`      | 0px               |
/// | `Sm`      | 576px             |
/// | `Md`      | 768px             |
/// | `Lg`      | 992px             |
/// | `Xl`      | 1200px            |
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl Breakpoint {
    /// All breakpoints in ascending order.
    pub const ALL: [Breakpoint; 5] = [
        Breakpoint::Xs,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
    ];

    /// Short lowercase label (`"xs"`..`"xl"`).
    pub const fn label(self) -> &'static str {
        match self {
            Breakpoint::Xs => "xs",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
        }
    }

    /// The next wider breakpoint, if any.
    pub const fn next(self) -> Option<Breakpoint> {
        match self {
            Breakpoint::Xs => Some(Breakpoint::Sm),
            Breakpoint::Sm => Some(Breakpoint::Md),
            Breakpoint::Md => Some(Breakpoint::Lg),
            Breakpoint::Lg => Some(Breakpoint::Xl),
            Breakpoint::Xl => None,
        }
    }
}

impl std::fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Pixel thresholds for the five breakpoints.
///
/// Each value is the minimum viewport width at which that breakpoint applies.
///
/// ```rust
/// use dashgrid::{Breakpoint, Breakpoints};
///
/// let table = Breakpoints::builder().md(800).build().unwrap();
/// assert_eq!(table.threshold(Breakpoint::Md), 800);
/// assert_eq!(table.threshold(Breakpoint::Lg), 992);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BreakpointsRaw", into = "BreakpointsRaw")]
pub struct Breakpoints {
    xs: u32,
    sm: u32,
    md: u32,
    lg: u32,
    xl: u32,
}

impl Breakpoints {
    /// The default table: 0 / 576 / 768 / 992 / 1200 px.
    pub const DEFAULT: Self = Self {
        xs: 0,
        sm: 576,
        md: 768,
        lg: 992,
        xl: 1200,
    };

    /// Create a table with all five thresholds.
    ///
    /// Fails if the thresholds are not strictly increasing.
    pub fn new(xs: u32, sm: u32, md: u32, lg: u32, xl: u32) -> Result<Self> {
        let table = Self { xs, sm, md, lg, xl };
        table.validate()?;
        Ok(table)
    }

    /// Create a builder that starts from the defaults.
    pub fn builder() -> BreakpointsBuilder {
        BreakpointsBuilder::default()
    }

    /// Minimum pixel width for a breakpoint.
    pub const fn threshold(&self, bp: Breakpoint) -> u32 {
        match bp {
            Breakpoint::Xs => self.xs,
            Breakpoint::Sm => self.sm,
            Breakpoint::Md => self.md,
            Breakpoint::Lg => self.lg,
            Breakpoint::Xl => self.xl,
        }
    }

    /// All `(breakpoint, threshold)` pairs in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (Breakpoint, u32)> + '_ {
        Breakpoint::ALL.into_iter().map(move |bp| (bp, self.threshold(bp)))
    }

    /// Classify a viewport width into the widest breakpoint it reaches.
    ///
    /// Widths below the `xs` threshold still classify as `Xs`.
    pub fn classify(&self, width: u32) -> Breakpoint {
        Breakpoint::ALL
            .into_iter()
            .rev()
            .find(|bp| width >= self.threshold(*bp))
            .unwrap_or(Breakpoint::Xs)
    }

    fn validate(&self) -> Result<()> {
        for pair in Breakpoint::ALL.windows(2) {
            let (lower, upper) = (pair[0], pair[1]);
            let (lower_px, upper_px) = (self.threshold(lower), self.threshold(upper));
            if upper_px <= lower_px {
                return Err(GridError::BreakpointOrder {
                    lower,
                    upper,
                    lower_px,
                    upper_px,
                });
            }
        }
        Ok(())
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Builder for [`Breakpoints`]. Unset thresholds keep their default value.
#[derive(Clone, Copy, Debug, Default)]
pub struct BreakpointsBuilder {
    xs: Option<u32>,
    sm: Option<u32>,
    md: Option<u32>,
    lg: Option<u32>,
    xl: Option<u32>,
}

impl BreakpointsBuilder {
    /// Override the `xs` threshold.
    pub fn xs(mut self, px: u32) -> Self {
        self.xs = Some(px);
        self
    }

    /// Override the `sm` threshold.
    pub fn sm(mut self, px: u32) -> Self {
        self.sm = Some(px);
        self
    }

    /// Override the `md` threshold.
    pub fn md(mut self, px: u32) -> Self {
        self.md = Some(px);
        self
    }

    /// Override the `lg` threshold.
    pub fn lg(mut self, px: u32) -> Self {
        self.lg = Some(px);
        self
    }

    /// Override the `xl` threshold.
    pub fn xl(mut self, px: u32) -> Self {
        self.xl = Some(px);
        self
    }

    /// Override a threshold by name.
    pub fn set(self, bp: Breakpoint, px: u32) -> Self {
        match bp {
            Breakpoint::Xs => self.xs(px),
            Breakpoint::Sm => self.sm(px),
            Breakpoint::Md => self.md(px),
            Breakpoint::Lg => self.lg(px),
            Breakpoint::Xl => self.xl(px),
        }
    }

    /// Merge the overrides over the defaults and validate the ordering.
    pub fn build(self) -> Result<Breakpoints> {
        let default = Breakpoints::DEFAULT;
        Breakpoints::new(
            self.xs.unwrap_or(default.xs),
            self.sm.unwrap_or(default.sm),
            self.md.unwrap_or(default.md),
            self.lg.unwrap_or(default.lg),
            self.xl.unwrap_or(default.xl),
        )
    }
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct BreakpointsRaw {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    xs: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sm: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    md: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    lg: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    xl: Option<u32>,
}

impl From<Breakpoints> for BreakpointsRaw {
    fn from(table: Breakpoints) -> Self {
        BreakpointsRaw {
            xs: Some(table.xs),
            sm: Some(table.sm),
            md: Some(table.md),
            lg: Some(table.lg),
            xl: Some(table.xl),
        }
    }
}

impl TryFrom<BreakpointsRaw> for Breakpoints {
    type Error = GridError;

    fn try_from(raw: BreakpointsRaw) -> Result<Self> {
        BreakpointsBuilder {
            xs: raw.xs,
            sm: raw.sm,
            md: raw.md,
            lg: raw.lg,
            xl: raw.xl,
        }
        .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_thresholds() {
        let table = Breakpoints::default();
        let pairs: Vec<_> = table.iter().collect();
        assert_eq!(
            pairs,
            vec![
                (Breakpoint::Xs, 0),
                (Breakpoint::Sm, 576),
                (Breakpoint::Md, 768),
                (Breakpoint::Lg, 992),
                (Breakpoint::Xl, 1200),
            ]
        );
    }

    #[test]
    fn builder_merges_over_defaults() {
        let table = Breakpoints::builder().sm(600).xl(1400).build().unwrap();
        assert_eq!(table.threshold(Breakpoint::Xs), 0);
        assert_eq!(table.threshold(Breakpoint::Sm), 600);
        assert_eq!(table.threshold(Breakpoint::Md), 768);
        assert_eq!(table.threshold(Breakpoint::Xl), 1400);
    }

    #[test]
    fn builder_set_by_name() {
        let table = Breakpoints::builder()
            .set(Breakpoint::Lg, 1024)
            .set(Breakpoint::Xl, 1440)
            .build()
            .unwrap();
        assert_eq!(table.threshold(Breakpoint::Lg), 1024);
        assert_eq!(table.threshold(Breakpoint::Xl), 1440);
    }

    #[test]
    fn builder_rejects_out_of_order_override() {
        let err = Breakpoints::builder().md(500).build().unwrap_err();
        assert!(matches!(
            err,
            GridError::BreakpointOrder {
                lower: Breakpoint::Sm,
                upper: Breakpoint::Md,
                ..
            }
        ));
    }

    #[test]
    fn equal_thresholds_are_rejected() {
        assert!(Breakpoints::new(0, 576, 576, 992, 1200).is_err());
    }

    #[test]
    fn classify_width() {
        let table = Breakpoints::default();
        assert_eq!(table.classify(0), Breakpoint::Xs);
        assert_eq!(table.classify(575), Breakpoint::Xs);
        assert_eq!(table.classify(576), Breakpoint::Sm);
        assert_eq!(table.classify(900), Breakpoint::Md);
        assert_eq!(table.classify(1199), Breakpoint::Lg);
        assert_eq!(table.classify(4000), Breakpoint::Xl);
    }

    #[test]
    fn next_walks_upward() {
        assert_eq!(Breakpoint::Xs.next(), Some(Breakpoint::Sm));
        assert_eq!(Breakpoint::Xl.next(), None);
    }

    #[test]
    fn serde_partial_override() {
        let table: Breakpoints = serde_json::from_str(r#"{"lg": 1024}"#).unwrap();
        assert_eq!(table.threshold(Breakpoint::Lg), 1024);
        assert_eq!(table.threshold(Breakpoint::Md), 768);
    }

    #[test]
    fn serde_rejects_bad_order() {
        let result: std::result::Result<Breakpoints, _> =
            serde_json::from_str(r#"{"sm": 2000}"#);
        assert!(result.is_err());
    }

    #[test]
    fn serde_rejects_unknown_names() {
        let result: std::result::Result<Breakpoints, _> =
            serde_json::from_str(r#"{"xxl": 1400}"#);
        assert!(result.is_err());
    }

    #[test]
    fn serde_serializes_full_table() {
        let json = serde_json::to_string(&Breakpoints::default()).unwrap();
        assert_eq!(json, r#"{"xs":0,"sm":576,"md":768,"lg":992,"xl":1200}"#);
    }

    #[test]
    fn breakpoint_serde_lowercase() {
        let json = serde_json::to_string(&Breakpoint::Md).unwrap();
        assert_eq!(json, "\"md\"");
    }
}
