use thiserror::Error;

/// Common result type for wakalead operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A duration string could not be parsed into minutes
    #[error("invalid duration: {0}")]
    Format(String),

    /// The scraped stats markup did not have the expected shape
    #[error("malformed stats markup: {0}")]
    Scrape(String),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP request error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
