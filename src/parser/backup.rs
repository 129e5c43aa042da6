//! Backup document parsing and window selection

use crate::error::{ExportError, Result};
use crate::models::{Backup, Window};

/// Parse the outer backup document. A leading UTF-8 byte-order mark is skipped.
pub fn parse_backup(text: &str) -> Result<Backup> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    serde_json::from_str(text).map_err(|e| ExportError::parse("backup document", e))
}

/// Select the window the export is built from. Only the first one counts.
pub fn root_window(backup: &Backup) -> Result<Window> {
    let first = backup
        .windows
        .as_ref()
        .ok_or_else(|| ExportError::missing("windows"))?
        .first()
        .ok_or_else(|| ExportError::missing("windows[0]"))?;

    serde_json::from_value(first.clone()).map_err(|e| ExportError::parse("windows[0]", e))
}
