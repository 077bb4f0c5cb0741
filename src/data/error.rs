use std::path::PathBuf;

use thiserror::Error;

/// Why the launch dataset could not be turned into a [`DatasetStore`].
///
/// Every variant is fatal at startup: the dashboard is never shown without
/// valid data.
///
/// [`DatasetStore`]: super::model::DatasetStore
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),

    #[error("dataset is missing required column '{0}'")]
    MissingColumn(&'static str),

    /// `record` counts data rows from 1, header excluded.
    #[error("record {record}: invalid value {value:?} in column '{column}'")]
    InvalidValue {
        record: usize,
        column: &'static str,
        value: String,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed Parquet: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("reading Arrow data: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("dataset contains no launch records")]
    Empty,
}
