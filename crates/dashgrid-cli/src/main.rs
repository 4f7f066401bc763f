//! `dashgrid` - print responsive grid styles for a layout file.
//!
//! ```text
//! dashgrid layout.yaml                  # CSS media rules for every cell
//! dashgrid layout.json --format json    # computed placements as JSON
//! dashgrid layout.yaml --selector col   # selectors become .col-<key>
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use dashgrid::{render_stylesheet, LayoutDocument};
use serde_json::json;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One `@media` rule per breakpoint for every cell.
    #[default]
    Css,
    /// Placements for every cell as a JSON array.
    Json,
}

/// Compute responsive widths and margins for a 12-column grid layout.
#[derive(Debug, Parser)]
#[command(name = "dashgrid", version, about)]
struct Cli {
    /// Layout document (.yaml, .yml or .json)
    file: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Css)]
    format: Format,

    /// Class prefix for generated selectors
    #[arg(short, long, default_value = "cell")]
    selector: String,

    /// Log layout decisions to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let output = run(&cli)?;
    print!("{}", output);
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<String> {
    let doc = LayoutDocument::from_file(&cli.file)
        .with_context(|| format!("failed to load layout from {}", cli.file.display()))?;
    debug!(cells = doc.cells.len(), gap = doc.config.column_gap, "loaded layout");

    let styles = doc.config.layout(&doc.cells);

    match cli.format {
        Format::Css => Ok(render_stylesheet(
            &doc.cells,
            &styles,
            &cli.selector,
            &doc.config.breakpoints,
        )),
        Format::Json => {
            let report: Vec<_> = doc
                .cells
                .iter()
                .zip(&styles)
                .enumerate()
                .map(|(index, (cell, style))| {
                    json!({
                        "index": index,
                        "key": cell.key,
                        "style": style,
                    })
                })
                .collect();
            let mut out = serde_json::to_string_pretty(&report)?;
            out.push('\n');
            Ok(out)
        }
    }
}
