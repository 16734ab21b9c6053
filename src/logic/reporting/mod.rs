//! Reporting Module - vulnerability executive summary
//!
//! Features:
//! - Per-severity counts and weighted risk score
//! - Priority action lines
//! - Export payload for the external PDF/CSV/HTML/JSON writers

pub mod types;
pub mod summary;

#[cfg(test)]
mod tests;

pub use types::{
    ExecutiveSummary, ExportFormat, FindingSeverity, ReportPayload, RiskLevel, ScanReport,
    ScanStatus, VulnerabilityFinding,
};
pub use summary::{generate_summary, priority_actions, risk_level_for};
