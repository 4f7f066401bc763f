//! Grid cells: the participants in a row.

use serde::{Deserialize, Serialize};

use crate::breakpoint::Breakpoints;
use crate::span::{resolve_span, Span};

/// One cell of a grid row.
///
/// ```rust
/// use dashgrid::{BreakpointMap, Cell};
///
/// let sidebar = Cell::new(BreakpointMap::new().xs(12).md(3)).key("sidebar");
/// let content = Cell::auto().key("content");
/// let padded = Cell::new(6).offset(3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Stable identity used to look the cell up. Carries no ordering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Declared span. `None` shares the row's unclaimed space equally.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
    /// Declared leading offset, in span units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<Span>,
}

impl Cell {
    /// A cell with a declared span.
    pub fn new(span: impl Into<Span>) -> Self {
        Cell {
            span: Some(span.into()),
            ..Default::default()
        }
    }

    /// A cell without a span; it takes a fair share of its row.
    pub fn auto() -> Self {
        Cell::default()
    }

    /// Set the identity key.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Set the span.
    pub fn span(mut self, span: impl Into<Span>) -> Self {
        self.span = Some(span.into());
        self
    }

    /// Set the offset.
    pub fn offset(mut self, offset: impl Into<Span>) -> Self {
        self.offset = Some(offset.into());
        self
    }

    /// Span at a viewport width, or `None` if unspecified there.
    pub fn resolved_span(&self, width: u32, table: &Breakpoints) -> Option<u32> {
        resolve_span(self.span.as_ref(), width, table)
    }

    /// Offset at a viewport width, or `None` if there is none.
    pub fn resolved_offset(&self, width: u32, table: &Breakpoints) -> Option<u32> {
        resolve_span(self.offset.as_ref(), width, table)
    }
}
