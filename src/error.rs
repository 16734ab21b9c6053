//! Error handling

use thiserror::Error;

pub type TrafficResult<T> = Result<T, TrafficError>;

#[derive(Debug, Clone, Error)]
pub enum TrafficError {
    // Transport errors
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error: {0}")]
    Server(u16),

    // Payload errors
    #[error("Parse error: {0}")]
    Parse(String),

    // Input errors
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for TrafficError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            TrafficError::Parse(err.to_string())
        } else if let Some(status) = err.status() {
            TrafficError::Server(status.as_u16())
        } else {
            TrafficError::Network(err.to_string())
        }
    }
}
