//! Wire types for the records endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! The endpoint wraps its payload one level: `{ "data": [Row, ...] }`. Rows
//! are open maps whose shape is whatever the endpoint returned; nothing here
//! validates them against the column registry.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// One fetched record: field name to scalar value.
pub type Row = serde_json::Map<String, serde_json::Value>;

/// Render a field value as cell text. Strings render bare, null renders
/// empty, everything else falls back to its JSON form.
#[must_use]
pub fn display_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Cell text for `row[key]`, empty when the field is absent.
#[must_use]
pub fn cell_text(row: &Row, key: &str) -> String {
    row.get(key).map(display_value).unwrap_or_default()
}
