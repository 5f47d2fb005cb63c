/// Errors from the table layer: loading CSV files and looking up columns.
use std::io;

use thiserror::Error;

/// Why a CSV file could not be turned into a table.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The path does not exist.
    #[error("File '{path}' not found")]
    NotFound {
        /// The path that was opened.
        path: String,
    },

    /// The file exists but the process may not read it.
    #[error("Permission denied reading '{path}'")]
    PermissionDenied {
        /// The path that was opened.
        path: String,
    },

    /// Any other I/O failure while opening the file.
    #[error("Could not open '{path}': {source}")]
    Io {
        /// The path that was opened.
        path: String,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The content could not be parsed as CSV.
    #[error("Could not parse '{path}' as csv: {message}")]
    Parse {
        /// The path that was parsed.
        path: String,
        /// Message reported by the CSV reader.
        message: String,
    },
}

impl LoadError {
    /// Classify an I/O error raised while opening `path`.
    #[must_use]
    pub fn from_io(path: &str, err: io::Error) -> Self {
        let path = path.to_owned();
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io { path, source: err },
        }
    }

    /// Machine-readable code used in JSON error output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "file_not_found",
            Self::PermissionDenied { .. } => "permission_denied",
            Self::Io { .. } => "io_error",
            Self::Parse { .. } => "parse_error",
        }
    }

    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound { .. } => 4,
            Self::PermissionDenied { .. } => 3,
            Self::Io { .. } | Self::Parse { .. } => 1,
        }
    }
}

/// Errors from column lookups against a loaded table.
#[derive(Debug, Error)]
pub enum TableError {
    /// A requested column does not exist.
    #[error("{name} not found")]
    ColumnNotFound {
        /// The requested column name.
        name: String,
        /// Existing column names that resemble the request, best first.
        candidates: Vec<String>,
    },
}
