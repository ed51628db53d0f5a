use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Failures raised while paginating the public comment listing.
///
/// Transport-level `reqwest` failures are mapped into `Timeout`/`Network`
/// at the client boundary so the enum stays `Clone` for the GUI message
/// path. None of these are retried: a failure anywhere in the pagination
/// loop terminates the run and discards everything fetched so far.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Reddit is blocking the request (HTTP 403)")]
    AccessBlocked,

    #[error("Request failed with status {status}")]
    FetchFailed { status: u16 },

    #[error("No comment data found for u/{username}")]
    NotFound { username: String },

    #[error("Request timed out")]
    Timeout,

    #[error("Network error: {message}")]
    Network { message: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    #[error("Configuration parsing error: {0}")]
    Parse(#[from] toml::de::Error),
}
