//! Writes the prerendered page (and optionally the campaign data) to disk.

use crate::render_page;
use anyhow::{Context, Result};
use diebra_core::fixtures::CAMPAIGN;
use diebra_core::{PageConfig, PageView};
use std::fs;
use std::path::{Path, PathBuf};

/// Where the exporter writes.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// HTML output file.
    pub output: PathBuf,
    /// Optional JSON dump of the compiled-in campaign data.
    pub fixtures_json: Option<PathBuf>,
}

/// What was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Bytes of HTML written.
    pub html_bytes: usize,
    /// Bytes of JSON written, if requested.
    pub fixtures_bytes: Option<usize>,
}

/// Render the initial page state (nothing open, bars at baseline) and write
/// it, creating parent directories as needed.
pub fn export_site(config: &PageConfig, options: &ExportOptions) -> Result<ExportSummary> {
    config.validate().context("invalid page configuration")?;

    let html = render_page(config, &PageView::default());
    write_file(&options.output, html.as_bytes())?;
    tracing::info!(path = %options.output.display(), bytes = html.len(), "page written");

    let fixtures_bytes = match &options.fixtures_json {
        Some(path) => {
            let json = serde_json::to_string_pretty(&CAMPAIGN).context("failed to serialize campaign data")?;
            write_file(path, json.as_bytes())?;
            tracing::info!(path = %path.display(), bytes = json.len(), "campaign data written");
            Some(json.len())
        }
        None => None,
    };

    Ok(ExportSummary {
        html_bytes: html.len(),
        fixtures_bytes,
    })
}

fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))
}
