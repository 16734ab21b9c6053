//! Threat Module
//!
//! Assigns a threat level to each HTTP request from its detector signals
//! (XSS / SQLi / path traversal scores) and anomaly model output.
//!
//! ## Structure
//! - `types`: Core types (ThreatLevel, ThreatSignals, AnomalyModel, ...)
//! - `rules`: The ordered rule table
//! - `classifier`: Classification logic
//!
//! ## Usage
//! ```ignore
//! use shield_traffic::logic::threat::{classify, ThreatEvidence, ThreatLevel};
//!
//! let result = classify(&ThreatEvidence::new(record.threats, record.watson));
//! match result.level {
//!     ThreatLevel::Critical => println!("Action needed"),
//!     _ => println!("{}", result.level),
//! }
//! ```

pub mod types;
pub mod rules;
pub mod classifier;

// Re-export main types for convenience
pub use types::{
    ThreatLevel,
    ThreatSignals,
    AnomalyModel,
    ThreatEvidence,
    ClassificationResult,
};

pub use rules::{ThreatRule, FALLBACK_LEVEL, RULES};

pub use classifier::{classify, classify_with_rules, classify_level};
