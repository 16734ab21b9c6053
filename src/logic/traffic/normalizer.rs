//! Log Normalizer
//!
//! RawLogRecord -> TrafficEvent. Total: malformed or missing fields degrade
//! to defaults, nothing here returns an error.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use uuid::Uuid;

use super::geo::{GeoLookup, NoGeoLookup};
use super::types::{is_blocked_status, RawLogRecord, TrafficEvent};
use crate::logic::threat::classify;

/// Naive layouts accepted when `received_at` carries no offset (read as UTC)
const NAIVE_LAYOUTS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

pub struct Normalizer {
    geo: Box<dyn GeoLookup>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(NoGeoLookup)
    }
}

impl Normalizer {
    pub fn new<G: GeoLookup + 'static>(geo: G) -> Self {
        Self { geo: Box::new(geo) }
    }

    /// Produce exactly one event for one record
    pub fn normalize(&self, raw: &RawLogRecord) -> TrafficEvent {
        let location = self.geo.locate(&raw.client_ip);
        let classification = classify(&raw.evidence());

        if let Some(rule) = classification.matched_rule {
            log::debug!(
                "{} {} from {} classified {} by {}",
                raw.method, raw.url, raw.client_ip, classification.level, rule
            );
        }

        TrafficEvent {
            id: Uuid::new_v4(),
            timestamp: normalize_timestamp(&raw.received_at),
            ip: raw.client_ip.clone(),
            country: location.country,
            city: location.city,
            user_agent: raw.user_agent().unwrap_or_default().to_string(),
            method: raw.method.clone(),
            request_path: raw.url.clone(),
            status_code: raw.status_code,
            process_time_ms: sanitize_duration(raw.process_time_ms),
            threat_level: classification.level,
            is_blocked: is_blocked_status(raw.status_code),
        }
    }

    /// Normalize a whole batch, preserving order
    pub fn normalize_batch(&self, records: &[RawLogRecord]) -> Vec<TrafficEvent> {
        records.iter().map(|r| self.normalize(r)).collect()
    }
}

/// Normalize with the default (no-op) geolocation
pub fn normalize(raw: &RawLogRecord) -> TrafficEvent {
    Normalizer::default().normalize(raw)
}

/// Re-emit a receive time as UTC RFC 3339 with milliseconds.
///
/// Unparseable input is kept verbatim.
pub fn normalize_timestamp(raw: &str) -> String {
    let trimmed = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return dt.with_timezone(&Utc).to_rfc3339_opts(SecondsFormat::Millis, true);
    }

    for layout in NAIVE_LAYOUTS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, layout) {
            return naive.and_utc().to_rfc3339_opts(SecondsFormat::Millis, true);
        }
    }

    if !trimmed.is_empty() {
        log::debug!("Unparseable received_at kept verbatim: {}", trimmed);
    }
    raw.to_string()
}

/// Process times are non-negative and finite
fn sanitize_duration(ms: f64) -> f64 {
    if ms.is_finite() && ms >= 0.0 {
        ms
    } else {
        log::debug!("Invalid process_time_ms {} replaced with 0", ms);
        0.0
    }
}
