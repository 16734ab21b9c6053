//! Threat Classifier
//!
//! Only the classify logic - types live in `types`, the table in `rules`.
//! Input: ThreatEvidence
//! Output: ClassificationResult

use super::rules::{ThreatRule, FALLBACK_LEVEL, RULES};
use super::types::{AnomalyModel, ClassificationResult, ThreatEvidence, ThreatLevel, ThreatSignals};

// ============================================================================
// MAIN CLASSIFICATION FUNCTION
// ============================================================================

/// Classify one request against the default rule table.
///
/// Deterministic; requests without detector or model data are always `low`.
pub fn classify(evidence: &ThreatEvidence) -> ClassificationResult {
    classify_with_rules(evidence, &RULES)
}

/// Classification against a caller-supplied table (first match wins)
pub fn classify_with_rules(evidence: &ThreatEvidence, rules: &[ThreatRule]) -> ClassificationResult {
    if evidence.is_empty() {
        return ClassificationResult::default();
    }

    rules
        .iter()
        .find(|rule| (rule.matches)(evidence))
        .map(|rule| ClassificationResult {
            level: rule.level,
            matched_rule: Some(rule.name),
        })
        .unwrap_or(ClassificationResult {
            level: FALLBACK_LEVEL,
            matched_rule: None,
        })
}

/// Quick classify straight from the raw optional parts
pub fn classify_level(signals: Option<ThreatSignals>, anomaly: Option<AnomalyModel>) -> ThreatLevel {
    classify(&ThreatEvidence::new(signals, anomaly)).level
}

// ============================================================================
// TESTS
// ============================================================================
