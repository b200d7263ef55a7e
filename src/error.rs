use std::path::PathBuf;

use arrow::error::ArrowError;
use thiserror::Error;

/// Failures while turning a data file into a `RegistrationTable`.
///
/// `File` is the only variant caused by the filesystem; every other variant
/// means the file was readable but its contents are not a registration table.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {path:?}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported file type for {0:?} (expected .xlsx, .xlsm, .xls, .ods or .csv)")]
    UnsupportedFormat(PathBuf),

    #[error("cannot parse workbook {path:?}: {source}")]
    Workbook {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("workbook {0:?} has no worksheets")]
    EmptyWorkbook(PathBuf),

    #[error("cannot parse CSV {path:?}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{path:?} is missing required column(s): {}", .missing.join(", "))]
    MissingColumns { path: PathBuf, missing: Vec<String> },

    #[error("{path:?} row {row}: invalid {column} value {value:?}")]
    InvalidCell {
        path: PathBuf,
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("building registration table: {0}")]
    Arrow(#[from] ArrowError),
}

impl LoadError {
    /// True for failures to reach the file at all, as opposed to bad contents.
    pub fn is_file_error(&self) -> bool {
        matches!(self, LoadError::File { .. })
    }
}

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("input closed before a known breed was entered")]
    InputClosed,

    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}
