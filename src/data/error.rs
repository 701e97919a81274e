use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the data layer.
///
/// Loading and range derivation fail fast; filtering and chart assembly
/// never fail (an empty result is a valid, renderable state).
#[derive(Debug, Error)]
pub enum DataError {
    #[error("file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("missing required column '{column}'")]
    Schema { column: &'static str },

    #[error("row {row}: {message}")]
    Parse { row: usize, message: String },

    #[error("dataset contains no rows")]
    EmptyDataset,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
