//! Dashboard API Client
//!
//! HTTP client for the `GET /traffic/logs?date=YYYY-MM-DD` query.

use std::future::Future;
use std::time::Duration;

use chrono::NaiveDate;
use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;

use super::{format_date, LogSource};
use crate::config::SourceConfig;
use crate::error::{TrafficError, TrafficResult};
use crate::logic::traffic::{RawLogRecord, TrafficLogsResponse};

/// Traffic log API client
pub struct HttpLogSource {
    config: SourceConfig,
    http_client: reqwest::Client,
}

impl HttpLogSource {
    /// Create new client
    pub fn new(config: SourceConfig) -> TrafficResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TrafficError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, http_client })
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    /// URL of one day's batch
    pub fn day_url(&self, date: NaiveDate) -> String {
        format!("{}?date={}", self.config.logs_url(), format_date(date))
    }

    /// GET request for one day, with the bearer token when configured
    pub fn build_request(&self, date: NaiveDate) -> reqwest::RequestBuilder {
        let request = self.http_client.get(self.day_url(date));
        match &self.config.auth_token {
            Some(token) => request.header(AUTHORIZATION, format!("Bearer {}", token)),
            None => request,
        }
    }

    async fn fetch(&self, date: NaiveDate) -> TrafficResult<Vec<RawLogRecord>> {
        log::debug!("Fetching traffic logs: {}", self.day_url(date));

        let response = self.build_request(date).send().await?;

        if let Err(e) = ensure_success(response.status()) {
            let error_text = response.text().await.unwrap_or_default();
            log::error!("Traffic log query failed ({}): {}", e, error_text);
            return Err(e);
        }

        let body: TrafficLogsResponse = response.json().await?;

        log::info!("Fetched {} traffic logs for {}", body.logs.len(), format_date(date));
        Ok(body.logs)
    }
}

/// Non-2xx responses become `TrafficError::Server`
fn ensure_success(status: StatusCode) -> TrafficResult<()> {
    if status.is_success() {
        Ok(())
    } else {
        Err(TrafficError::Server(status.as_u16()))
    }
}

impl LogSource for HttpLogSource {
    fn fetch_logs(&self, date: NaiveDate) -> impl Future<Output = TrafficResult<Vec<RawLogRecord>>> + Send {
        self.fetch(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_url() {
        let source = HttpLogSource::new(SourceConfig {
            base_url: "https://dash.example.com/api".to_string(),
            ..Default::default()
        })
        .unwrap();

        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(
            source.day_url(date),
            "https://dash.example.com/api/traffic/logs?date=2024-01-05"
        );
    }

    #[test]
    fn test_bearer_token_attached() {
        let source = HttpLogSource::new(SourceConfig {
            auth_token: Some("s3cret".to_string()),
            ..Default::default()
        })
        .unwrap();

        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let request = source.build_request(date).build().unwrap();

        assert_eq!(*request.method(), reqwest::Method::GET);
        assert_eq!(request.url().as_str(), "http://localhost:8080/traffic/logs?date=2024-01-15");
        assert_eq!(request.headers()[AUTHORIZATION], "Bearer s3cret");
    }

    #[test]
    fn test_no_token_no_header() {
        let source = HttpLogSource::new(SourceConfig::default()).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let request = source.build_request(date).build().unwrap();

        assert!(request.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_non_success_status_is_server_error() {
        assert!(ensure_success(StatusCode::OK).is_ok());
        assert!(ensure_success(StatusCode::NO_CONTENT).is_ok());
        assert!(matches!(ensure_success(StatusCode::BAD_GATEWAY), Err(TrafficError::Server(502))));
        assert!(matches!(ensure_success(StatusCode::UNAUTHORIZED), Err(TrafficError::Server(401))));
        assert!(matches!(
            ensure_success(StatusCode::MOVED_PERMANENTLY),
            Err(TrafficError::Server(301))
        ));
    }
}
