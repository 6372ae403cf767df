use polars::prelude::PolarsError;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PathwayError {
    #[error("Cannot find \"{}\". Check file exists in the specified directory.", .path.display())]
    MissingFile { path: PathBuf },

    #[error("Missing column \"{column}\" in {}", .path.display())]
    MissingColumn { path: PathBuf, column: String },

    #[error("Malformed record at line {line}: {message}")]
    MalformedRecord { line: usize, message: String },

    #[error("Invalid GeneID at line {line}: \"{value}\" (expected <organism>:<id>)")]
    InvalidGeneId { line: usize, value: String },

    #[error("Unknown PathID at line {line}: \"{path_id}\" is not in the pathway catalog")]
    UnknownPathway { line: usize, path_id: String },

    #[error("Cannot write {}: {message}", .path.display())]
    Write { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
}

/// Type alias for Result with PathwayError
pub type Result<T> = std::result::Result<T, PathwayError>;

impl PathwayError {
    /// Create a new MissingFile error
    pub fn missing_file(path: impl AsRef<Path>) -> Self {
        PathwayError::MissingFile {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create a new MissingColumn error
    pub fn missing_column(path: impl AsRef<Path>, column: impl Into<String>) -> Self {
        PathwayError::MissingColumn {
            path: path.as_ref().to_path_buf(),
            column: column.into(),
        }
    }

    /// Create a new MalformedRecord error
    pub fn malformed_record(line: usize, message: impl Into<String>) -> Self {
        PathwayError::MalformedRecord {
            line,
            message: message.into(),
        }
    }

    /// Create a new Write error
    pub fn write(path: impl AsRef<Path>, message: impl ToString) -> Self {
        PathwayError::Write {
            path: path.as_ref().to_path_buf(),
            message: message.to_string(),
        }
    }

    /// True for errors caused by the shape or content of an input row
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            PathwayError::MissingColumn { .. }
                | PathwayError::MalformedRecord { .. }
                | PathwayError::InvalidGeneId { .. }
                | PathwayError::UnknownPathway { .. }
        )
    }
}
