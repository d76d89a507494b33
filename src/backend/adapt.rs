//! Endpoint adapters
//!
//! Each endpoint gets exactly one function mapping its raw JSON to the
//! canonical schema. Anything that does not fit collapses to an empty
//! collection; malformed entries are dropped one by one.

use serde_json::{Map, Value};

use crate::schemas::{Annotation, PermissionRecord, ReviewRecord};

const ENVELOPE_KEY: &str = "data";
const ANNOTATION_KEYS: [&str; 2] = ["status", "comment"];

/// Map a permissions response to grants.
///
/// Accepts a bare array or `{"data": [...]}`.
pub fn adapt_permissions(raw: &Value) -> Vec<PermissionRecord> {
    let entries = match raw {
        Value::Array(entries) => entries,
        Value::Object(map) => match map.get(ENVELOPE_KEY) {
            Some(Value::Array(entries)) => entries,
            _ => return Vec::new(),
        },
        _ => return Vec::new(),
    };

    entries
        .iter()
        .filter_map(|entry| serde_json::from_value(entry.clone()).ok())
        .collect()
}

/// Whether an object has the shape of a single annotation
fn is_annotation_shaped(map: &Map<String, Value>) -> bool {
    !map.is_empty() && map.keys().all(|key| ANNOTATION_KEYS.contains(&key.as_str()))
}

/// Map a review response to the annotation mapping.
///
/// Accepts a bare map or `{"data": {...}}`. A lone `data` entry whose value
/// is itself an annotation is a field named `data`, not an envelope.
pub fn adapt_review(raw: &Value) -> ReviewRecord {
    let map = match raw {
        Value::Object(map) if map.len() == 1 => match map.get(ENVELOPE_KEY) {
            Some(Value::Object(inner)) if !is_annotation_shaped(inner) => inner,
            _ => map,
        },
        Value::Object(map) => map,
        _ => return ReviewRecord::new(),
    };

    map.iter()
        .filter_map(|(field_id, value)| {
            serde_json::from_value::<Annotation>(value.clone())
                .ok()
                .map(|annotation| (field_id.clone(), annotation))
        })
        .collect()
}
