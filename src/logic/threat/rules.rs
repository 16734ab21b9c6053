//! Threat Classification Rules
//!
//! The ordered rule table. Evaluation is first-match: the first entry whose
//! predicate holds decides the level, even when a later entry would have
//! produced a higher one (an XSS hit stays `high` when SQLi also fired).
//! No classify logic here - only the table and its predicates.

use super::types::{ThreatEvidence, ThreatLevel};

/// One `(predicate, result)` entry of the rule table
#[derive(Clone, Copy)]
pub struct ThreatRule {
    pub name: &'static str,
    pub level: ThreatLevel,
    pub matches: fn(&ThreatEvidence) -> bool,
}

impl std::fmt::Debug for ThreatRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThreatRule")
            .field("name", &self.name)
            .field("level", &self.level)
            .finish()
    }
}

/// Level assigned when no rule matches
pub const FALLBACK_LEVEL: ThreatLevel = ThreatLevel::Low;

// ============================================================================
// RULE TABLE (order is significant)
// ============================================================================

pub const RULES: [ThreatRule; 5] = [
    ThreatRule {
        name: "xss_signal",
        level: ThreatLevel::High,
        matches: xss_detected,
    },
    ThreatRule {
        name: "sqli_signal",
        level: ThreatLevel::Critical,
        matches: sqli_detected,
    },
    ThreatRule {
        name: "path_traversal_signal",
        level: ThreatLevel::Medium,
        matches: path_traversal_detected,
    },
    ThreatRule {
        name: "anomaly_flag",
        level: ThreatLevel::Critical,
        matches: anomaly_flagged,
    },
    ThreatRule {
        name: "reconstruction_error",
        level: ThreatLevel::High,
        matches: reconstruction_over_threshold,
    },
];

// ============================================================================
// PREDICATES
// ============================================================================

fn xss_detected(ev: &ThreatEvidence) -> bool {
    ev.signals.map_or(false, |s| s.xss_score > 0.0)
}

fn sqli_detected(ev: &ThreatEvidence) -> bool {
    ev.signals.map_or(false, |s| s.sqli_score > 0.0)
}

fn path_traversal_detected(ev: &ThreatEvidence) -> bool {
    ev.signals.map_or(false, |s| s.path_traversal_score > 0.0)
}

fn anomaly_flagged(ev: &ThreatEvidence) -> bool {
    ev.anomaly.map_or(false, |a| a.is_anomaly)
}

fn reconstruction_over_threshold(ev: &ThreatEvidence) -> bool {
    ev.anomaly
        .map_or(false, |a| a.reconstruction_error > a.threshold)
}
