use crate::error::*;
use tracing::error;

pub trait ErrorExt {
    fn log_error(&self) -> &Self;
    fn user_friendly_message(&self) -> String;
    fn error_code(&self) -> String;
}

impl ErrorExt for CoreError {
    fn log_error(&self) -> &Self {
        error!("CoreError: {}", self);
        match self {
            CoreError::Fetch(e) => {
                error!("Fetch error details: {:?}", e);
            }
            CoreError::Config(e) => {
                error!("Configuration error details: {:?}", e);
            }
            _ => {}
        }
        self
    }

    fn user_friendly_message(&self) -> String {
        match self {
            CoreError::Fetch(e) => e.user_friendly_message(),
            CoreError::Config(_) => {
                "The configuration file could not be read. Please check snooscope.toml."
                    .to_string()
            }
            CoreError::InvalidInput { message } => message.clone(),
            CoreError::Io(_) => "A file could not be read or written.".to_string(),
            CoreError::Serialization(_) => {
                "Received data in an unexpected format.".to_string()
            }
            CoreError::Internal { .. } => {
                "An unexpected error occurred. Please try again later.".to_string()
            }
        }
    }

    fn error_code(&self) -> String {
        match self {
            CoreError::Fetch(e) => e.error_code(),
            CoreError::Config(_) => "CONFIG".to_string(),
            CoreError::Io(_) => "IO".to_string(),
            CoreError::Serialization(_) => "SERIALIZATION".to_string(),
            CoreError::InvalidInput { .. } => "INVALID_INPUT".to_string(),
            CoreError::Internal { .. } => "INTERNAL".to_string(),
        }
    }
}

impl ErrorExt for FetchError {
    fn log_error(&self) -> &Self {
        error!("FetchError: {}", self);
        self
    }

    fn user_friendly_message(&self) -> String {
        match self {
            FetchError::AccessBlocked => {
                "Access forbidden: Reddit is blocking the request. Try a different network or method."
                    .to_string()
            }
            FetchError::FetchFailed { status } => {
                format!("Error fetching data: {status}")
            }
            FetchError::NotFound { .. } => {
                "No data found for this user or the user does not exist.".to_string()
            }
            FetchError::Timeout => {
                "Reddit took too long to respond. Please try again.".to_string()
            }
            FetchError::Network { .. } => {
                "Network connection error. Please check your internet connection.".to_string()
            }
        }
    }

    fn error_code(&self) -> String {
        match self {
            FetchError::AccessBlocked => "ACCESS_BLOCKED".to_string(),
            FetchError::FetchFailed { .. } => "FETCH_FAILED".to_string(),
            FetchError::NotFound { .. } => "NOT_FOUND".to_string(),
            FetchError::Timeout => "TIMEOUT".to_string(),
            FetchError::Network { .. } => "NETWORK".to_string(),
        }
    }
}
