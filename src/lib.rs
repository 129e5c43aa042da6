//! Session Manager backup to HTML exporter
//!
//! Reads a Session Manager backup, rebuilds its tab groups from the
//! double-encoded `tabview-group`/`tabview-tab` fields and writes every tab
//! as an HTML link collection, one heading per tab group.

pub mod error;
pub mod models;
pub mod parser;
pub mod report;
pub mod output;
pub mod utils;

pub use error::{ExportError, Result};
pub use models::{GroupedTabs, Session, TabGroup, TabGroups, TabRecord, UrlEntry};
pub use parser::extract_session;
pub use report::{EntryLayout, RenderOptions, PINNED_SUFFIX};

use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    pub render: RenderOptions,
    /// Destination override; defaults to `<input>.html`.
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct ExportResult {
    pub output_path: PathBuf,
    pub group_count: usize,
    pub tab_count: usize,
    pub default_group_tabs: usize,
}

/// Render already extracted tab groups.
pub fn render_session(session: &Session, options: &RenderOptions) -> Result<String> {
    report::generate_report(session, options)
}

/// Convert backup text to the HTML document, without touching the disk.
pub fn convert_backup(text: &str, options: &RenderOptions) -> Result<String> {
    let session = extract_session(text)?;
    render_session(&session, options)
}

/// A rendered link collection that has not been written yet.
#[derive(Debug, Clone)]
pub struct PreparedExport {
    pub html: String,
    pub result: ExportResult,
}

impl PreparedExport {
    /// Write the document to `result.output_path`, replacing any existing file.
    pub fn write(self) -> Result<ExportResult> {
        output::write_html(&self.result.output_path, &self.html)?;
        tracing::debug!(
            path = %self.result.output_path.display(),
            bytes = self.html.len(),
            "wrote link collection"
        );
        Ok(self.result)
    }
}

/// Read, extract and render a backup without writing anything.
pub fn prepare_export(input_path: &Path, options: &ExportOptions) -> Result<PreparedExport> {
    // 1. Load backup
    let text = output::load_backup(input_path)?;

    // 2. Extract groups and tabs
    let session = extract_session(&text)?;

    // 3. Render fully before anything is written
    let html = render_session(&session, &options.render)?;

    let output_path = options
        .output
        .clone()
        .unwrap_or_else(|| output::default_output_path(input_path));

    Ok(PreparedExport {
        html,
        result: ExportResult {
            output_path,
            group_count: session.grouped.len(),
            tab_count: session.tab_count(),
            default_group_tabs: session.default_group_tab_count(),
        },
    })
}

/// Main entry point: read a backup file and write its link collection.
pub fn export_backup(input_path: &Path, options: &ExportOptions) -> Result<ExportResult> {
    prepare_export(input_path, options)?.write()
}
