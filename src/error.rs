//! Error taxonomy for backup export

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("expected exactly one backup file argument")]
    Usage,

    #[error("the specified parameter is not an existing file: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("failed to parse {context}: {source}")]
    Parse {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("missing field: {0}")]
    MissingField(String),

    #[error("invalid format: {0}")]
    Format(String),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExportError {
    pub fn parse(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }

    /// Process exit code reported by the CLI for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            ExportError::Io { .. } => 1,
            ExportError::Usage => 2,
            ExportError::FileNotFound(_) => 3,
            ExportError::Parse { .. } => 4,
            ExportError::MissingField(_) => 5,
            ExportError::Format(_) => 6,
        }
    }
}

pub type Result<T, E = ExportError> = std::result::Result<T, E>;
