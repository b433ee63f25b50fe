//! Error types for roster loading and aggregation.
//!
//! Two domain errors exist: [`RosterError::DataFormat`] for malformed input
//! rows and [`RosterError::EmptyDataset`] for aggregates over zero records.
//! Collaborator errors (`io`, `csv`) convert automatically so `?` works
//! across the load boundary.

use thiserror::Error;

/// Errors produced while loading student records or computing aggregates.
#[derive(Debug, Error)]
pub enum RosterError {
    /// A required field is missing or a numeric field failed to parse.
    #[error("row {line}, field '{field}': {message}")]
    DataFormat {
        line: usize,
        field: String,
        message: String,
    },

    /// An aggregate was requested over a roster with zero records.
    #[error("dataset is empty, overall average is undefined")]
    EmptyDataset,

    /// Error from the CSV reader/writer.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Error reading or writing a report file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error serializing the run summary as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for roster operations.
pub type RosterResult<T> = Result<T, RosterError>;
