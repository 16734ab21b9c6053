//! Traffic Module - access log ingestion
//!
//! - `types`: RawLogRecord (wire) and TrafficEvent (canonical)
//! - `geo`: pluggable geolocation, "N/A" by default
//! - `normalizer`: RawLogRecord -> TrafficEvent (classified)
//! - `stats`: rollups over a batch
//! - `filter`: search / blocked-only view filter

pub mod types;
pub mod geo;
pub mod normalizer;
pub mod stats;
pub mod filter;


pub use types::{RawLogRecord, StatusClass, TrafficEvent, TrafficLogsResponse};
pub use geo::{GeoLocation, GeoLookup, NoGeoLookup};
pub use normalizer::{normalize, normalize_timestamp, Normalizer};
pub use stats::{summarize, TrafficSummary};
pub use filter::TrafficFilter;
