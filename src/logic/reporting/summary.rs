//! Executive Summary
//!
//! Weighted risk score over a list of findings:
//! (10·critical + 7·high + 4·medium + 1·low) / max(total, 1), one decimal.

use chrono::Utc;

use super::types::{
    ExecutiveSummary, ExportFormat, FindingSeverity, ReportPayload, RiskLevel, ScanReport,
    VulnerabilityFinding,
};

// ============================================================================
// RISK THRESHOLDS
// ============================================================================

pub const CRITICAL_RISK_MIN: f64 = 8.0;
pub const HIGH_RISK_MIN: f64 = 6.0;
pub const MEDIUM_RISK_MIN: f64 = 4.0;

pub fn generate_summary(findings: &[VulnerabilityFinding]) -> ExecutiveSummary {
    let count = |severity: FindingSeverity| findings.iter().filter(|f| f.severity == severity).count();

    let critical = count(FindingSeverity::Critical);
    let high = count(FindingSeverity::High);
    let medium = count(FindingSeverity::Medium);
    let low = count(FindingSeverity::Low);
    let total = findings.len();

    let weighted: u64 = findings.iter().map(|f| u64::from(f.severity.weight())).sum();
    let raw_score = weighted as f64 / total.max(1) as f64;
    let risk_score = (raw_score * 10.0).round() / 10.0;

    ExecutiveSummary {
        total,
        critical,
        high,
        medium,
        low,
        risk_score,
        risk_level: risk_level_for(risk_score),
    }
}

/// Level bands are applied to the rounded score, not the raw mean:
/// a raw 7.96 reports as 8.0 / Critical, never as 8.0 / High.
pub fn risk_level_for(score: f64) -> RiskLevel {
    if score >= CRITICAL_RISK_MIN {
        RiskLevel::Critical
    } else if score >= HIGH_RISK_MIN {
        RiskLevel::High
    } else if score >= MEDIUM_RISK_MIN {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Lines for the "Priority Actions" block
pub fn priority_actions(summary: &ExecutiveSummary) -> Vec<String> {
    let mut actions = Vec::new();

    if summary.critical > 0 {
        actions.push(format!("{} Critical issues require immediate attention", summary.critical));
    }
    if summary.high > 0 {
        actions.push(format!("{} High severity issues need prompt resolution", summary.high));
    }
    if actions.is_empty() {
        actions.push("No critical or high severity issues found".to_string());
    }

    actions
}

impl ReportPayload {
    pub fn new(scan: ScanReport, format: ExportFormat) -> Self {
        let summary = generate_summary(&scan.vulnerabilities);
        log::info!(
            "Report for {} ({}): {} findings, risk {} ({})",
            scan.target_url, format.extension(), summary.total, summary.risk_score, summary.risk_level
        );

        Self {
            priority_actions: priority_actions(&summary),
            summary,
            scan,
            generated_at: Utc::now(),
            format,
        }
    }

    /// Suggested download name, e.g. `vulnerability-report-42.json`
    pub fn file_name(&self) -> String {
        format!("vulnerability-report-{}.{}", self.scan.id, self.format.extension())
    }
}
