use chrono::{TimeZone, Utc};
use serde_json::json;

use super::summary::{generate_summary, priority_actions, risk_level_for};
use super::types::{
    ExportFormat, FindingSeverity, ReportPayload, RiskLevel, ScanReport, ScanStatus,
    VulnerabilityFinding,
};

fn finding(severity: FindingSeverity) -> VulnerabilityFinding {
    VulnerabilityFinding {
        id: "1".to_string(),
        kind: "XSS".to_string(),
        severity,
        description: "Reflected XSS".to_string(),
        url: "/search".to_string(),
        evidence: None,
        recommendation: None,
        ai_analysis: None,
    }
}

fn findings(spec: &[(FindingSeverity, usize)]) -> Vec<VulnerabilityFinding> {
    spec.iter()
        .flat_map(|(sev, n)| std::iter::repeat_with(move || finding(*sev)).take(*n))
        .collect()
}

#[test]
fn test_empty_findings() {
    let summary = generate_summary(&[]);
    assert_eq!(summary.total, 0);
    assert_eq!(summary.risk_score, 0.0);
    assert_eq!(summary.risk_level, RiskLevel::Low);
}

#[test]
fn test_two_criticals_and_a_high() {
    let summary = generate_summary(&findings(&[
        (FindingSeverity::Critical, 2),
        (FindingSeverity::High, 1),
    ]));

    assert_eq!(summary.critical, 2);
    assert_eq!(summary.high, 1);
    assert_eq!(summary.total, 3);
    assert_eq!(summary.risk_score, 9.0);
    assert_eq!(summary.risk_level, RiskLevel::Critical);
}

#[test]
fn test_info_counts_toward_total_only() {
    let summary = generate_summary(&findings(&[
        (FindingSeverity::Medium, 1),
        (FindingSeverity::Info, 1),
    ]));

    assert_eq!(summary.total, 2);
    assert_eq!(summary.medium, 1);
    assert_eq!(summary.risk_score, 2.0);
    assert_eq!(summary.risk_level, RiskLevel::Low);
}

#[test]
fn test_score_rounded_to_one_decimal() {
    // (10 + 7 + 7 + 4 + 1 + 1) / 6 = 5.0
    let summary = generate_summary(&findings(&[
        (FindingSeverity::Critical, 1),
        (FindingSeverity::High, 2),
        (FindingSeverity::Medium, 1),
        (FindingSeverity::Low, 2),
    ]));
    assert_eq!(summary.risk_score, 5.0);
    assert_eq!(summary.risk_level, RiskLevel::Medium);

    // (10 + 7 + 7 + 1) / 4 = 6.25 -> 6.3
    let summary = generate_summary(&findings(&[
        (FindingSeverity::Critical, 1),
        (FindingSeverity::High, 2),
        (FindingSeverity::Low, 1),
    ]));
    assert_eq!(summary.risk_score, 6.3);
    assert_eq!(summary.risk_level, RiskLevel::High);
}

#[test]
fn test_level_uses_rounded_score() {
    // 167 / 21 = 7.952 -> 8.0
    let summary = generate_summary(&findings(&[
        (FindingSeverity::Critical, 16),
        (FindingSeverity::High, 1),
        (FindingSeverity::Info, 4),
    ]));
    assert_eq!(summary.risk_score, 8.0);
    assert_eq!(summary.risk_level, RiskLevel::Critical);
}

#[test]
fn test_risk_bands() {
    assert_eq!(risk_level_for(10.0), RiskLevel::Critical);
    assert_eq!(risk_level_for(8.0), RiskLevel::Critical);
    assert_eq!(risk_level_for(7.9), RiskLevel::High);
    assert_eq!(risk_level_for(6.0), RiskLevel::High);
    assert_eq!(risk_level_for(4.0), RiskLevel::Medium);
    assert_eq!(risk_level_for(3.9), RiskLevel::Low);
    assert_eq!(risk_level_for(0.0), RiskLevel::Low);
}

#[test]
fn test_priority_actions() {
    let none = generate_summary(&findings(&[(FindingSeverity::Medium, 3)]));
    assert_eq!(priority_actions(&none), vec!["No critical or high severity issues found"]);

    let both = generate_summary(&findings(&[
        (FindingSeverity::Critical, 1),
        (FindingSeverity::High, 2),
    ]));
    let actions = priority_actions(&both);
    assert_eq!(actions.len(), 2);
    assert!(actions[0].starts_with("1 Critical"));
    assert!(actions[1].starts_with("2 High"));
}

#[test]
fn test_finding_wire_format() {
    let f: VulnerabilityFinding = serde_json::from_value(json!({
        "id": "3",
        "type": "SQL Injection",
        "severity": "critical",
        "url": "/auth"
    }))
    .unwrap();

    assert_eq!(f.kind, "SQL Injection");
    assert_eq!(f.severity, FindingSeverity::Critical);
    assert_eq!(f.description, "");
    assert!(f.evidence.is_none());
}

#[test]
fn test_report_payload() {
    let scan = ScanReport {
        id: "2".to_string(),
        target_url: "https://test.com".to_string(),
        scan_date: Utc.with_ymd_and_hms(2024, 1, 14, 10, 0, 0).unwrap(),
        vulnerabilities: findings(&[(FindingSeverity::Critical, 1)]),
        scan_duration: 32,
        status: ScanStatus::Completed,
    };

    let payload = ReportPayload::new(scan, ExportFormat::Json);
    assert_eq!(payload.file_name(), "vulnerability-report-2.json");
    assert_eq!(payload.summary.risk_score, 10.0);

    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value["summary"]["riskLevel"], "Critical");
    assert_eq!(value["scan"]["targetUrl"], "https://test.com");
    assert_eq!(value["format"], "json");
    assert_eq!(value["priorityActions"][0], "1 Critical issues require immediate attention");
}
