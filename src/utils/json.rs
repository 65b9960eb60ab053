use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

/// Lenient parse of a form field that should hold a JSON string array.
/// Form clients serialize these inconsistently, so a malformed value falls
/// back to comma-splitting instead of raising.
pub fn lenient_string_list(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    if let Ok(JsonValue::Array(items)) = serde_json::from_str::<JsonValue>(trimmed) {
        return items
            .into_iter()
            .map(|item| match item {
                JsonValue::String(s) => s,
                other => other.to_string(),
            })
            .collect();
    }

    trimmed.split(',').map(|s| s.trim().to_string()).collect()
}

/// Lenient parse of a form field holding a JSON array of structured
/// items. Malformed input yields an empty list, never an error.
pub fn lenient_json_list<T: DeserializeOwned>(raw: Option<&str>) -> Vec<T> {
    raw.and_then(|s| serde_json::from_str(s).ok())
        .unwrap_or_default()
}

/// Shallow merge of a JSON object patch into a base object, mirroring
/// the document store's update semantics so callers can compute the
/// post-merge record without a second read.
pub fn shallow_merge(base: &mut JsonValue, patch: &JsonValue) {
    if let (Some(base), Some(patch)) = (base.as_object_mut(), patch.as_object()) {
        for (key, value) in patch {
            base.insert(key.clone(), value.clone());
        }
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
