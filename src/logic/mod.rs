//! Logic Module - Business Logic & Engines
//!
//! - `threat/` - ordered threat rule table and classifier
//! - `traffic/` - raw log normalization, rollups, view filter
//! - `reporting/` - vulnerability executive summary
//! - `source/` - daily log retrieval and per-date cache

pub mod threat;
pub mod traffic;
pub mod reporting;
pub mod source;

pub(crate) mod lenient;
