//! Threat Types
//!
//! Core types for traffic threat classification.
//! No logic here - only data structures.

use serde::{Deserialize, Serialize};

use crate::logic::lenient;

// ============================================================================
// THREAT LEVEL
// ============================================================================

/// Threat level shown next to every traffic event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThreatLevel {
    /// Nothing matched
    Low,
    /// Path traversal attempt
    Medium,
    /// XSS hit or reconstruction error above threshold
    High,
    /// SQL injection or anomaly flag
    Critical,
}

impl ThreatLevel {
    pub const ALL: [ThreatLevel; 4] = [
        ThreatLevel::Low,
        ThreatLevel::Medium,
        ThreatLevel::High,
        ThreatLevel::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThreatLevel::Low => "low",
            ThreatLevel::Medium => "medium",
            ThreatLevel::High => "high",
            ThreatLevel::Critical => "critical",
        }
    }

    pub fn severity_level(&self) -> u8 {
        match self {
            ThreatLevel::Low => 0,
            ThreatLevel::Medium => 1,
            ThreatLevel::High => 2,
            ThreatLevel::Critical => 3,
        }
    }
}

impl Default for ThreatLevel {
    fn default() -> Self {
        ThreatLevel::Low
    }
}

impl std::fmt::Display for ThreatLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// DETECTOR SIGNALS (from upstream WAF detectors)
// ============================================================================

/// Per-attack-class scores attached to a request
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThreatSignals {
    #[serde(rename = "xss", deserialize_with = "lenient::or_default")]
    pub xss_score: f64,
    #[serde(rename = "sqli", deserialize_with = "lenient::or_default")]
    pub sqli_score: f64,
    #[serde(rename = "pathtraversal", deserialize_with = "lenient::or_default")]
    pub path_traversal_score: f64,
}

// ============================================================================
// ANOMALY MODEL OUTPUT
// ============================================================================

/// Outlier-detection model verdict for a request
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnomalyModel {
    #[serde(rename = "anomaly", deserialize_with = "lenient::or_default")]
    pub is_anomaly: bool,
    #[serde(deserialize_with = "lenient::or_default")]
    pub reconstruction_error: f64,
    #[serde(deserialize_with = "lenient::or_default")]
    pub threshold: f64,
}

// ============================================================================
// EVIDENCE
// ============================================================================

/// Everything the classifier looks at for one request.
///
/// Both parts are optional: the degraded data source ships neither.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ThreatEvidence {
    pub signals: Option<ThreatSignals>,
    pub anomaly: Option<AnomalyModel>,
}

impl ThreatEvidence {
    pub fn new(signals: Option<ThreatSignals>, anomaly: Option<AnomalyModel>) -> Self {
        Self { signals, anomaly }
    }

    /// True when no detector or model data accompanies the request
    pub fn is_empty(&self) -> bool {
        self.signals.is_none() && self.anomaly.is_none()
    }
}

// ============================================================================
// CLASSIFICATION RESULT
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    pub level: ThreatLevel,
    /// Name of the rule that matched, `None` when falling through to low
    pub matched_rule: Option<&'static str>,
}

impl Default for ClassificationResult {
    fn default() -> Self {
        Self {
            level: ThreatLevel::Low,
            matched_rule: None,
        }
    }
}
