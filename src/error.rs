use thiserror::Error;

/// Top-level application error that composes all subsystem errors
#[derive(Error, Debug)]
pub(crate) enum AppError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Triple store errors
    #[error("Triple store error: {0}")]
    TripleStore(#[from] arca_triple_store::error::TripleStoreError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Result rows that could not be serialized for output
    #[error("Failed to encode result row: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid command-line usage
    #[error("{0}")]
    InvalidArguments(String),
}
