//! JSON output formatting.

/// Format a value as compact JSON.
pub fn format_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

/// Format a value as indented JSON, for types without a pretty formatter.
pub fn format_json_pretty<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}
