use thiserror::Error;

/// Errors that can occur while loading and validating projection data
#[derive(Debug, Error)]
pub enum ViewerError {
    /// HTTP transport error while fetching the input document
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status while fetching the input document
    #[error("HTTP {code} fetching '{url}'")]
    Status { code: u16, url: String },

    /// Filesystem error (local data files, chart output)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Unparseable input document
    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Parseable document missing a required field
    #[error("Malformed input: missing field '{field}'")]
    MalformedInput { field: String },

    /// Configuration error (missing env vars, invalid paths, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// A newer refresh superseded this load before it completed
    #[error("Load superseded by a newer refresh")]
    Superseded,

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Type alias for Results using ViewerError
pub type Result<T> = std::result::Result<T, ViewerError>;
