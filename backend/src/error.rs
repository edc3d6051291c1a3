//! Error types of the backend layers.
//!
//! Handlers never let these escape: each one is turned into an inline message
//! for the view, see `services::error_response`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("department data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("data source '{0}' not found")]
    NotFound(String),

    #[error("invalid data source: {0}")]
    Invalid(String),
}

/// A stored label that no longer maps onto the model enums.
#[derive(Error, Debug)]
#[error("unknown {field} '{label}'")]
pub struct UnknownLabel {
    pub field: &'static str,
    pub label: String,
}

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("upload failed: {0}")]
    Multipart(String),

    #[error("the file must end with .csv")]
    NotCsv,

    #[error("missing file part")]
    MissingFile,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid header: {0}")]
    Header(String),

    #[error("row {row}: {message}")]
    Row { row: usize, message: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("could not load fonts: {0}")]
    Font(genpdf::error::Error),

    #[error("PDF rendering failed: {0}")]
    Render(genpdf::error::Error),
}
