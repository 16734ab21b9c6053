//! Lenient field deserializers for upstream log payloads.
//!
//! A null or mistyped field degrades to its default instead of failing the
//! record (and with it the whole day's batch).

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Any `T`; null or wrong type yields `T::default()`
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// Header map; null values are dropped, non-string scalars are stringified
pub fn headers<'de, D>(deserializer: D) -> Result<HashMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Object(map) = value else {
        return Ok(HashMap::new());
    };

    Ok(map
        .into_iter()
        .filter_map(|(name, value)| match value {
            Value::String(s) => Some((name, s)),
            Value::Null => None,
            other => Some((name, other.to_string())),
        })
        .collect())
}

/// Record list; entries that fail to deserialize are skipped with a warning
pub fn records<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };

    Ok(items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match T::deserialize(item) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("Skipping unreadable log entry #{}: {}", index, e);
                None
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Sample {
        #[serde(deserialize_with = "or_default")]
        count: u16,
        #[serde(deserialize_with = "headers")]
        headers: HashMap<String, String>,
    }

    #[test]
    fn test_null_and_mistyped_fall_back() {
        let s: Sample = serde_json::from_value(json!({ "count": null })).unwrap();
        assert_eq!(s.count, 0);

        let s: Sample = serde_json::from_value(json!({ "count": "many" })).unwrap();
        assert_eq!(s.count, 0);

        let s: Sample = serde_json::from_value(json!({ "count": -4 })).unwrap();
        assert_eq!(s.count, 0);

        let s: Sample = serde_json::from_value(json!({ "count": 7 })).unwrap();
        assert_eq!(s.count, 7);
    }

    #[test]
    fn test_headers_drop_nulls() {
        let s: Sample = serde_json::from_value(json!({
            "headers": { "user-agent": null, "x-retry": 3, "host": "a.example" }
        }))
        .unwrap();

        assert_eq!(s.headers.len(), 2);
        assert_eq!(s.headers["x-retry"], "3");
        assert_eq!(s.headers["host"], "a.example");

        let s: Sample = serde_json::from_value(json!({ "headers": "oops" })).unwrap();
        assert!(s.headers.is_empty());
    }
}
