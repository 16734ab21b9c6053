//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To change the default dashboard API, only edit this file.

/// Default dashboard API base URL
///
/// This is the fallback URL when no environment variable is set.
/// For development: http://localhost:8080
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Path of the daily traffic log query, relative to the API base
pub const TRAFFIC_LOGS_PATH: &str = "/traffic/logs";

/// Default HTTP timeout (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Placeholder used when geolocation is unavailable
pub const GEO_UNAVAILABLE: &str = "N/A";

/// Calendar date format used as the batch key
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Default log filter for the binary
pub const DEFAULT_LOG_FILTER: &str = "shield_traffic=info,traffic_report=info";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get dashboard API URL from environment or use default
pub fn get_api_url() -> String {
    std::env::var("TRAFFIC_API_URL")
        .unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Get bearer token from environment, if any
pub fn get_api_token() -> Option<String> {
    std::env::var("TRAFFIC_API_TOKEN")
        .ok()
        .filter(|t| !t.trim().is_empty())
}

/// Get HTTP timeout from environment or use default
pub fn get_timeout_secs() -> u64 {
    std::env::var("TRAFFIC_API_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_TIMEOUT_SECS)
}
