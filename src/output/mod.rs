//! Backup loading and link collection output

use crate::error::{ExportError, Result};
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Read the whole backup file as text.
pub fn load_backup(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(ExportError::FileNotFound(path.to_path_buf()));
    }

    fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ExportError::FileNotFound(path.to_path_buf()),
        _ => ExportError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// `<input>.html`, keeping the input's own extension.
pub fn default_output_path(input: &Path) -> PathBuf {
    let mut name: OsString = input.as_os_str().to_owned();
    name.push(".html");
    PathBuf::from(name)
}

/// Write the rendered document, replacing any existing file.
pub fn write_html(path: &Path, html: &str) -> Result<()> {
    fs::write(path, html).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_output_path_appends_extension() {
        assert_eq!(
            default_output_path(Path::new("backups/session.session")),
            PathBuf::from("backups/session.session.html")
        );
        assert_eq!(
            default_output_path(Path::new("backup")),
            PathBuf::from("backup.html")
        );
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_backup(&temp_dir.path().join("nope.session")).unwrap_err();
        assert!(matches!(err, ExportError::FileNotFound(_)));
    }

    #[test]
    fn test_directory_is_not_a_backup() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_backup(temp_dir.path()).unwrap_err();
        assert!(matches!(err, ExportError::FileNotFound(_)));
    }

    #[test]
    fn test_write_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.html");
        fs::write(&path, "stale content that is longer").unwrap();

        write_html(&path, "<html></html>").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<html></html>");
    }
}
