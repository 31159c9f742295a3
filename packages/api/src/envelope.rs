//! # Envelope normalization
//!
//! The backend is not consistent about how it wraps lists. Depending on the endpoint
//! (and the deployed version) a list may arrive bare, or inside an object under one
//! of several keys. Each endpoint family gets one adapter with a fixed fallback
//! order:
//!
//! | Adapter | Fallback order |
//! |---------|----------------|
//! | [`bare_list`] | bare array, otherwise empty |
//! | [`student_list`] | bare array, `value`, `students`, `data`, first array-valued field, otherwise empty |
//! | [`recommendation_list`] | bare array, `recommended_tutors`, otherwise empty |
//!
//! "First array-valued field" follows document order; `serde_json` is built with
//! `preserve_order` for that reason.
//!
//! [`records`] then turns the raw elements into typed records, skipping elements
//! that do not fit rather than failing the whole list.

use serde::de::DeserializeOwned;
use serde_json::Value;

const STUDENT_KEYS: &[&str] = &["value", "students", "data"];
const RECOMMENDATION_KEYS: &[&str] = &["recommended_tutors"];

/// Lists that the backend always returns bare.
pub fn bare_list(body: Value) -> Vec<Value> {
    coerce(body, &[], false)
}

/// `GET /students`.
pub fn student_list(body: Value) -> Vec<Value> {
    coerce(body, STUDENT_KEYS, true)
}

/// `GET /students/{id}/recommendations`.
pub fn recommendation_list(body: Value) -> Vec<Value> {
    coerce(body, RECOMMENDATION_KEYS, false)
}

fn coerce(body: Value, keys: &[&str], any_array: bool) -> Vec<Value> {
    let mut map = match body {
        Value::Array(items) => return items,
        Value::Object(map) => map,
        _ => return Vec::new(),
    };

    for key in keys {
        if matches!(map.get(*key), Some(Value::Array(_))) {
            if let Some(Value::Array(items)) = map.remove(*key) {
                return items;
            }
        }
    }

    if any_array {
        if let Some(items) = map.into_iter().find_map(|(_, v)| match v {
            Value::Array(items) => Some(items),
            _ => None,
        }) {
            return items;
        }
    }

    Vec::new()
}

/// Deserialize each element on its own; elements of the wrong shape are dropped.
pub fn records<T: DeserializeOwned>(items: Vec<Value>, what: &str) -> Vec<T> {
    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!("Skipping malformed {what} record: {e}");
                None
            }
        })
        .collect()
}
