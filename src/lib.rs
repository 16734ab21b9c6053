//! One-Shield Traffic Core
//!
//! Data core behind the security dashboard's traffic analyzer and scan reports.
//!
//! # Architecture
//!
//! ```text
//! GET /traffic/logs?date=YYYY-MM-DD
//!        │
//!        ▼
//! ┌───────────────┐   ┌──────────────┐   ┌─────────────────┐
//! │ TrafficLog    │──▶│ Normalizer   │──▶│ TrafficEvent[]  │──▶ summarize / filter
//! │ Cache (date)  │   │ + classifier │   └─────────────────┘
//! └───────────────┘   └──────────────┘
//!
//! VulnerabilityFinding[] ──▶ generate_summary ──▶ ExecutiveSummary / ReportPayload
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod logic;

pub use config::SourceConfig;
pub use error::{TrafficError, TrafficResult};
pub use logic::reporting::{generate_summary, ExecutiveSummary, ReportPayload, VulnerabilityFinding};
pub use logic::source::{HttpLogSource, LogSource, TrafficLogCache};
pub use logic::threat::{classify, ThreatLevel};
pub use logic::traffic::{normalize, summarize, Normalizer, RawLogRecord, TrafficEvent, TrafficSummary};
