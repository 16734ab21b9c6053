//! Configuration module

use crate::constants;
use crate::error::{TrafficError, TrafficResult};

/// Dashboard API configuration
#[derive(Debug, Clone, PartialEq)]
pub struct SourceConfig {
    /// API base URL, without trailing slash
    pub base_url: String,

    /// Bearer token sent with every request
    pub auth_token: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: constants::DEFAULT_API_URL.to_string(),
            auth_token: None,
            timeout_secs: constants::DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl SourceConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> TrafficResult<Self> {
        Self {
            base_url: constants::get_api_url(),
            auth_token: constants::get_api_token(),
            timeout_secs: constants::get_timeout_secs(),
        }
        .validated()
    }

    /// Normalize the base URL and reject unusable values
    pub fn validated(mut self) -> TrafficResult<Self> {
        let trimmed = self.base_url.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(TrafficError::Config(format!(
                "base url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }
        if self.timeout_secs == 0 {
            return Err(TrafficError::Config("timeout must be at least 1 second".to_string()));
        }
        self.base_url = trimmed.to_string();
        Ok(self)
    }

    /// Full URL of the daily log query
    pub fn logs_url(&self) -> String {
        format!("{}{}", self.base_url, constants::TRAFFIC_LOGS_PATH)
    }
}
