//! diebra-render CLI binary
//!
//! Prerenders the monitoring page to a static HTML file. For library usage,
//! see the `diebra_page` crate documentation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use diebra_core::PageConfig;
use diebra_page::export::{ExportOptions, export_site};

/// Render the Diebra stream monitoring page to static HTML.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// TOML page configuration. Built-in defaults when omitted.
    #[arg(long, short)]
    config: Option<PathBuf>,
    /// HTML output file.
    #[arg(long, short, default_value = "dist/index.html")]
    output: PathBuf,
    /// Also write the campaign data as pretty JSON.
    #[arg(long)]
    fixtures_json: Option<PathBuf>,
    /// Debug logging (RUST_LOG takes precedence).
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let config = match &cli.config {
        Some(path) => PageConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => PageConfig::default(),
    };

    let summary = export_site(
        &config,
        &ExportOptions {
            output: cli.output.clone(),
            fixtures_json: cli.fixtures_json.clone(),
        },
    )?;

    tracing::info!(
        output = %cli.output.display(),
        html_bytes = summary.html_bytes,
        fixtures_bytes = ?summary.fixtures_bytes,
        "export complete"
    );
    Ok(())
}
