//! Errors surfaced by the analysis.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or reporting on a members file
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("You must indicate a datafile!")]
    MissingDatafile,

    #[error("The file '{}' was not found", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("Unsupported source format '{0}', only csv files can be analysed")]
    UnsupportedFormat(String),

    #[error("Failed to parse members from '{}': {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error(transparent)]
    Index(#[from] IndexError),

    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Lookup of a member by position failed
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexError {
    #[error("Please select a positive index (got {index})")]
    Negative { index: i64 },

    #[error("There are only {size} MPs! (index {index} is out of range)")]
    TooLarge { index: i64, size: usize },
}

pub type Result<T> = core::result::Result<T, AnalysisError>;
