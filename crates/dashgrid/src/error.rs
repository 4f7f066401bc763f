//! Error types for grid configuration.
//!
//! Layout computation itself never fails. Errors only arise at the
//! configuration boundary: parsing layout files and validating breakpoint
//! tables.

use std::path::PathBuf;

use thiserror::Error;

use crate::breakpoint::Breakpoint;

/// Errors that can occur while building or loading grid configuration.
#[derive(Debug, Error)]
pub enum GridError {
    /// The document could not be parsed into the expected shape.
    #[error("failed to parse {format} document: {message}")]
    Parse {
        /// Source format ("yaml" or "json").
        format: &'static str,
        /// Message from the underlying parser.
        message: String,
    },

    /// Breakpoint thresholds are not strictly increasing.
    #[error(
        "breakpoint '{upper}' ({upper_px}px) must be wider than '{lower}' ({lower_px}px)"
    )]
    BreakpointOrder {
        lower: Breakpoint,
        upper: Breakpoint,
        lower_px: u32,
        upper_px: u32,
    },

    /// File extension is not one of the supported formats.
    #[error("unsupported layout file format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<serde_yaml::Error> for GridError {
    fn from(err: serde_yaml::Error) -> Self {
        GridError::Parse {
            format: "yaml",
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for GridError {
    fn from(err: serde_json::Error) -> Self {
        GridError::Parse {
            format: "json",
            message: err.to_string(),
        }
    }
}

/// Result type for grid configuration operations.
pub type Result<T> = std::result::Result<T, GridError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_order_display() {
        let err = GridError::BreakpointOrder {
            lower: Breakpoint::Sm,
            upper: Breakpoint::Md,
            lower_px: 800,
            upper_px: 768,
        };
        let msg = err.to_string();
        assert!(msg.contains("'md' (768px)"));
        assert!(msg.contains("'sm' (800px)"));
    }

    #[test]
    fn from_json_error() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: GridError = json_err.into();
        assert!(matches!(err, GridError::Parse { format: "json", .. }));
    }

    #[test]
    fn io_error_has_source() {
        use std::error::Error as _;

        let err = GridError::Io {
            path: PathBuf::from("layout.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("layout.yaml"));
    }
}
