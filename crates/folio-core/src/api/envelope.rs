//! Normalization of the backend's inconsistent response envelopes.
//!
//! Depending on the endpoint, a list comes back as a bare array, as
//! `{ "data": [...] }`, or under the resource name (`{ "blogs": [...] }`).
//! Single records show the same variation. Everything past the client only
//! sees typed records.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::ApiError;

/// Find the list in a response, or `None` if no accepted shape matches
fn list_value(value: Value, key: &str) -> Option<Vec<Value>> {
    match value {
        Value::Array(items) => Some(items),
        Value::Object(mut map) => {
            if let Some(Value::Array(items)) = map.remove("data") {
                return Some(items);
            }
            match map.remove(key) {
                Some(Value::Array(items)) => Some(items),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Extract a typed list from any accepted envelope.
///
/// Unrecognised shapes (including `null`) yield an empty list. Items that do
/// not decode as `T` are an error rather than being silently dropped.
pub fn extract_list<T: DeserializeOwned>(value: Value, key: &str) -> Result<Vec<T>, ApiError> {
    let Some(items) = list_value(value, key) else {
        return Ok(Vec::new());
    };
    items
        .into_iter()
        .map(|item| {
            serde_json::from_value(item)
                .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse {}: {}", key, e)))
        })
        .collect()
}

/// Extract a single typed record from `{key: {...}}`, `{data: {...}}` or a
/// bare object.
pub fn extract_one<T: DeserializeOwned>(value: Value, key: &str) -> Result<T, ApiError> {
    let inner = match value {
        Value::Object(mut map) => {
            if let Some(found @ Value::Object(_)) = map.remove(key) {
                found
            } else if let Some(found @ Value::Object(_)) = map.remove("data") {
                found
            } else {
                Value::Object(map)
            }
        }
        Value::Null => {
            return Err(ApiError::InvalidResponse(format!("Empty {} response", key)));
        }
        other => other,
    };
    serde_json::from_value(inner)
        .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse {}: {}", key, e)))
}
