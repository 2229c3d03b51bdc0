use thiserror::Error;

/// Triple store specific errors
#[derive(Error, Debug)]
pub enum TripleStoreError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Triple store returned a non-2xx response
    #[error("Triple store error (status {status}): {body}")]
    Request { status: u16, body: String },

    /// A triple could not be rendered into valid SPARQL terms
    #[error("Failed to encode triple: {triple}")]
    TripleEncoding { triple: String },

    /// Operation not available on this store variant
    #[error("Method <{operation}> not implemented for {backend}")]
    Unsupported {
        backend: &'static str,
        operation: &'static str,
    },

    /// Failed to parse response
    #[error("Failed to parse response: {reason}")]
    Parse { reason: String },
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, TripleStoreError>;
