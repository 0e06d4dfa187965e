//! Common rendering utilities shared across tool definitions.
//!
//! Remote response shapes are consumed as open JSON structures; these
//! helpers read fields defensively and substitute a fixed placeholder
//! instead of ever failing on a missing field.

use serde_json::Value;

/// Placeholder rendered for absent, null or empty display fields.
pub const PLACEHOLDER: &str = "N/A";

/// Currency label prefixed to monetary values.
const CURRENCY: &str = "R$";

/// Walk a dotted path into an open JSON structure.
fn lookup<'a>(data: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(data, |value, key| value.get(key))
}

/// Render a scalar for display: strings unquoted, everything else as JSON.
fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Render the field at `path`, or the placeholder when it is absent,
/// null or an empty string.
pub fn field(data: &Value, path: &[&str]) -> String {
    match lookup(data, path) {
        None | Some(Value::Null) => PLACEHOLDER.to_string(),
        Some(Value::String(s)) if s.is_empty() => PLACEHOLDER.to_string(),
        Some(value) => scalar(value),
    }
}

/// Render the first present field among `paths`, or the placeholder.
pub fn first_field(data: &Value, paths: &[&[&str]]) -> String {
    paths
        .iter()
        .map(|path| field(data, path))
        .find(|rendered| rendered != PLACEHOLDER)
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Render a monetary field as its raw numeric value with the currency
/// label, defaulting to zero. No rounding or locale formatting.
pub fn money(data: &Value, path: &[&str]) -> String {
    let amount = match lookup(data, path) {
        Some(value @ Value::Number(_)) => scalar(value),
        _ => "0".to_string(),
    };
    format!("{CURRENCY} {amount}")
}

/// Length of the array at `path` (the root when `path` is empty),
/// zero when absent or not an array.
pub fn list_len(data: &Value, path: &[&str]) -> usize {
    lookup(data, path)
        .and_then(Value::as_array)
        .map(Vec::len)
        .unwrap_or(0)
}

/// Join the scalar items of a root-level array with `", "`.
pub fn join_items(data: &Value) -> String {
    data.as_array()
        .map(|items| items.iter().map(scalar).collect::<Vec<_>>().join(", "))
        .unwrap_or_default()
}

/// Serialize the full decoded body as formatted structured text.
pub fn pretty(data: &Value) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string())
}
