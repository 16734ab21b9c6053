//! Log Source Module - daily traffic log retrieval
//!
//! This module handles:
//! - The `LogSource` seam (one batch per calendar day)
//! - The HTTP client for the dashboard API
//! - A per-date cache that shares one in-flight request per date

pub mod client;
pub mod cache;

pub use client::HttpLogSource;
pub use cache::TrafficLogCache;

use std::future::Future;

use chrono::NaiveDate;

use crate::constants::DATE_FORMAT;
use crate::error::{TrafficError, TrafficResult};
use crate::logic::traffic::RawLogRecord;

/// Anything that can produce the raw logs of one calendar day
pub trait LogSource: Send + Sync {
    fn fetch_logs(&self, date: NaiveDate) -> impl Future<Output = TrafficResult<Vec<RawLogRecord>>> + Send;
}

/// Parse a `YYYY-MM-DD` batch key
pub fn parse_date(value: &str) -> TrafficResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| TrafficError::InvalidDate(value.to_string()))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        let date = parse_date("2024-01-15").unwrap();
        assert_eq!(format_date(date), "2024-01-15");
        assert_eq!(parse_date(" 2024-02-29 ").unwrap().to_string(), "2024-02-29");
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert!(matches!(parse_date("15/01/2024"), Err(TrafficError::InvalidDate(_))));
        assert!(parse_date("2023-02-29").is_err());
        assert!(parse_date("").is_err());
    }
}
