//! Traffic Types
//!
//! Wire format of the raw access log and the canonical event derived from it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::logic::lenient;
use crate::logic::threat::{AnomalyModel, ThreatEvidence, ThreatLevel, ThreatSignals};

// ============================================================================
// RAW LOG RECORD (as served by the traffic log API)
// ============================================================================

/// One captured HTTP request/response pair.
///
/// Every field is optional on the wire; missing, null or mistyped ones take
/// their default so one bad field never costs the rest of the batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawLogRecord {
    #[serde(deserialize_with = "lenient::or_default")]
    pub client_ip: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub method: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub url: String,
    /// Request headers, keys lower-cased by convention
    #[serde(deserialize_with = "lenient::headers")]
    pub headers: HashMap<String, String>,
    /// Opaque, never inspected
    pub request_body: serde_json::Value,
    #[serde(deserialize_with = "lenient::or_default")]
    pub status_code: u16,
    #[serde(deserialize_with = "lenient::or_default")]
    pub process_time_ms: f64,
    /// ISO-8601 receive time
    #[serde(deserialize_with = "lenient::or_default")]
    pub received_at: String,
    /// Detector scores, absent on the degraded data source
    #[serde(deserialize_with = "lenient::or_default")]
    pub threats: Option<ThreatSignals>,
    /// Anomaly model verdict, absent on the degraded data source
    #[serde(deserialize_with = "lenient::or_default")]
    pub watson: Option<AnomalyModel>,
}

impl RawLogRecord {
    /// Header lookup, exact key first then case-insensitive
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .or_else(|| {
                self.headers
                    .iter()
                    .find(|(k, _)| k.eq_ignore_ascii_case(name))
                    .map(|(_, v)| v)
            })
            .map(String::as_str)
    }

    pub fn user_agent(&self) -> Option<&str> {
        self.header("user-agent")
    }

    pub fn evidence(&self) -> ThreatEvidence {
        ThreatEvidence::new(self.threats, self.watson)
    }
}

/// Response body of `GET /traffic/logs?date=YYYY-MM-DD`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrafficLogsResponse {
    #[serde(default, deserialize_with = "lenient::records")]
    pub logs: Vec<RawLogRecord>,
}

// ============================================================================
// TRAFFIC EVENT (canonical, immutable)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficEvent {
    /// Fresh per normalization, only meaningful as a list key
    pub id: Uuid,
    /// UTC RFC 3339, millisecond precision
    pub timestamp: String,
    pub ip: String,
    pub country: String,
    pub city: String,
    pub user_agent: String,
    pub method: String,
    pub request_path: String,
    #[serde(rename = "status")]
    pub status_code: u16,
    #[serde(rename = "time")]
    pub process_time_ms: f64,
    pub threat_level: ThreatLevel,
    pub is_blocked: bool,
}

impl TrafficEvent {
    pub fn status_class(&self) -> StatusClass {
        StatusClass::from_code(self.status_code)
    }
}

/// Any response at or above this status counts as blocked
pub const BLOCKED_STATUS_MIN: u16 = 400;

pub fn is_blocked_status(status_code: u16) -> bool {
    status_code >= BLOCKED_STATUS_MIN
}

// ============================================================================
// STATUS CLASS
// ============================================================================

/// Response code family, used to colour the status column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusClass {
    Success,
    Redirect,
    ClientError,
    ServerError,
    Other,
}

impl StatusClass {
    pub fn from_code(code: u16) -> Self {
        match code {
            200..=299 => StatusClass::Success,
            300..=399 => StatusClass::Redirect,
            400..=499 => StatusClass::ClientError,
            500..=u16::MAX => StatusClass::ServerError,
            _ => StatusClass::Other,
        }
    }
}
