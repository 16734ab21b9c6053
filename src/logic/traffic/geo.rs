//! Geolocation lookup
//!
//! Country/city resolution is an external dependency. The default
//! implementation resolves nothing and every event shows the placeholder.

use crate::constants::GEO_UNAVAILABLE;

/// Best-effort location of a client address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeoLocation {
    pub country: String,
    pub city: String,
}

impl GeoLocation {
    pub fn unavailable() -> Self {
        Self {
            country: GEO_UNAVAILABLE.to_string(),
            city: GEO_UNAVAILABLE.to_string(),
        }
    }
}

impl Default for GeoLocation {
    fn default() -> Self {
        Self::unavailable()
    }
}

pub trait GeoLookup: Send + Sync {
    /// `None` when the address cannot be located
    fn lookup(&self, ip: &str) -> Option<GeoLocation>;

    /// Lookup that always yields a location, falling back to "N/A"
    fn locate(&self, ip: &str) -> GeoLocation {
        self.lookup(ip).unwrap_or_default()
    }
}

/// No-op lookup
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGeoLookup;

impl GeoLookup for NoGeoLookup {
    fn lookup(&self, _ip: &str) -> Option<GeoLocation> {
        None
    }
}
