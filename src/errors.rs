use std::io;

use thiserror::Error;

use crate::types::FieldName;

/// Error type for batch validation, ingestion, and demo-app IO failures.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error("dataset contains no records")]
    EmptyDataset,
    #[error("missing required column(s): {}", .missing.join(", "))]
    MissingColumns { missing: Vec<FieldName> },
    #[error("malformed record at index {index}: {details}")]
    MalformedRecord { index: usize, details: String },
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}
