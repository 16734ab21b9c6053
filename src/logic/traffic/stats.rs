//! Traffic Rollups
//!
//! Counts and averages over exactly the events handed in - no windowing.

use std::collections::BTreeMap;

use serde::Serialize;

use super::types::TrafficEvent;
use crate::logic::threat::ThreatLevel;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficSummary {
    pub total_requests: usize,
    pub blocked_requests: usize,
    pub critical_threats: usize,
    /// Rounded mean of process time; `None` for an empty batch
    pub average_response_time_ms: Option<i64>,
    /// Share of blocked requests in percent, one decimal; `None` for an empty batch
    pub blocked_percentage: Option<f64>,
    pub by_threat_level: BTreeMap<ThreatLevel, usize>,
}

impl TrafficSummary {
    pub fn is_empty(&self) -> bool {
        self.total_requests == 0
    }
}

pub fn summarize(events: &[TrafficEvent]) -> TrafficSummary {
    let total_requests = events.len();

    let mut by_threat_level: BTreeMap<ThreatLevel, usize> =
        ThreatLevel::ALL.iter().map(|level| (*level, 0)).collect();
    let mut blocked_requests = 0;
    let mut total_time = 0.0f64;

    for event in events {
        if event.is_blocked {
            blocked_requests += 1;
        }
        *by_threat_level.entry(event.threat_level).or_insert(0) += 1;
        total_time += event.process_time_ms;
    }

    let critical_threats = by_threat_level
        .get(&ThreatLevel::Critical)
        .copied()
        .unwrap_or(0);

    TrafficSummary {
        total_requests,
        blocked_requests,
        critical_threats,
        average_response_time_ms: average_ms(total_time, total_requests),
        blocked_percentage: percentage(blocked_requests, total_requests),
        by_threat_level,
    }
}

fn average_ms(total: f64, count: usize) -> Option<i64> {
    if count == 0 {
        return None;
    }
    // Times are non-negative, so round() matches round-half-up here
    Some((total / count as f64).round() as i64)
}

fn percentage(part: usize, whole: usize) -> Option<f64> {
    if whole == 0 {
        return None;
    }
    Some((part as f64 / whole as f64 * 1000.0).round() / 10.0)
}
