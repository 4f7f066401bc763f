//! Grid configuration and layout documents.
//!
//! Configuration is plain data with defaults applied at deserialization, so
//! every field may be omitted:
//!
//! ```yaml
//! column_gap: 2
//! breakpoints:
//!   md: 800
//! cells:
//!   - key: header
//!     span: 12
//!   - key: chart
//!     span: { xs: 12, md: 8 }
//!   - key: legend
//! ```

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::breakpoint::Breakpoints;
use crate::cell::Cell;
use crate::error::{GridError, Result};

/// Column gap and breakpoint table shared by every cell of a grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Gap between adjacent cells of a row, in percent of the row width.
    #[serde(alias = "columnGap")]
    pub column_gap: f64,
    /// Breakpoint thresholds. Omitted keys keep their defaults.
    pub breakpoints: Breakpoints,
}

impl GridConfig {
    /// Set the column gap.
    pub fn column_gap(mut self, percent: f64) -> Self {
        self.column_gap = percent;
        self
    }

    /// Set the breakpoint table.
    pub fn breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    /// Parse a configuration from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a `.yaml`, `.yml` or `.json` file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        load_file(path.as_ref())
    }
}

/// A grid configuration together with its ordered cells.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutDocument {
    #[serde(flatten)]
    pub config: GridConfig,
    #[serde(default)]
    pub cells: Vec<Cell>,
}

impl LayoutDocument {
    /// Parse a layout document from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse a layout document from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a layout document from a `.yaml`, `.yml` or `.json` file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        load_file(path.as_ref())
    }
}

fn load_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    let is_json = match extension.as_deref() {
        Some("yaml") | Some("yml") => false,
        Some("json") => true,
        _ => return Err(GridError::UnsupportedFormat(path.to_path_buf())),
    };

    let content = std::fs::read_to_string(path).map_err(|source| GridError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if is_json {
        Ok(serde_json::from_str(&content)?)
    } else {
        Ok(serde_yaml::from_str(&content)?)
    }
}
