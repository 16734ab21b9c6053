//! Traffic table filter (search box + "blocked only" toggle)

use serde::Deserialize;

use super::types::TrafficEvent;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrafficFilter {
    /// Case-insensitive substring over ip, country, city and path
    pub search: String,
    pub blocked_only: bool,
}

impl TrafficFilter {
    pub fn new(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            blocked_only: false,
        }
    }

    pub fn with_blocked_only(mut self, blocked_only: bool) -> Self {
        self.blocked_only = blocked_only;
        self
    }

    pub fn matches(&self, event: &TrafficEvent) -> bool {
        if self.blocked_only && !event.is_blocked {
            return false;
        }

        let needle = self.search.to_lowercase();
        if needle.is_empty() {
            return true;
        }

        [&event.ip, &event.country, &event.city, &event.request_path]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    pub fn apply<'a>(&self, events: &'a [TrafficEvent]) -> Vec<&'a TrafficEvent> {
        events.iter().filter(|e| self.matches(e)).collect()
    }
}
