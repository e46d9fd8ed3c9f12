//! Structural helpers over a parsed router document.
//!
//! Everything here works on `serde_json::Value` directly: router files are
//! checked for field presence, so deserializing into a typed struct would
//! lose exactly the information the lint needs.

use serde_json::{Map, Value};

/// Top-level key holding the route list.
pub const ROUTES_KEY: &str = "routes";

/// Route key holding the regex.
pub const PATTERN_KEY: &str = "pattern";

/// Route key holding the fallback template identifier.
pub const FALLBACK_KEY: &str = "fallback";

/// Route key holding the optional integer priority.
pub const PRECEDENCE_KEY: &str = "precedence";

/// Returns the route list, or the message for a structural failure.
///
/// Only an object with an array under `routes` continues to per-route
/// checks; route-shaped data under any other key is ignored.
pub fn routes(document: &Value) -> Result<&[Value], String> {
    let Some(object) = document.as_object() else {
        return Err(format!(
            "top-level value must be an object with a '{ROUTES_KEY}' array, found {}",
            type_name(document)
        ));
    };

    match object.get(ROUTES_KEY) {
        Some(Value::Array(routes)) => Ok(routes.as_slice()),
        Some(other) => Err(format!(
            "top-level key '{ROUTES_KEY}' must be an array, found {}",
            type_name(other)
        )),
        None => Err(format!("top-level key '{ROUTES_KEY}' missing")),
    }
}

/// Required fields absent from `entry`, in policy order.
pub fn missing_fields<'p>(entry: &Map<String, Value>, required: &'p [String]) -> Vec<&'p str> {
    required
        .iter()
        .filter(|field| !entry.contains_key(field.as_str()))
        .map(String::as_str)
        .collect()
}

/// Integer precedence value, if the entry has one.
///
/// Booleans count as 0 and 1, so `true` shares a slot with `1`. Floats,
/// strings, and null are not precedence values.
pub fn precedence(entry: &Map<String, Value>) -> Option<i128> {
    match entry.get(PRECEDENCE_KEY)? {
        Value::Number(n) => n
            .as_i64()
            .map(i128::from)
            .or_else(|| n.as_u64().map(i128::from)),
        Value::Bool(flag) => Some(i128::from(*flag)),
        _ => None,
    }
}

/// Renders a value the way it appears in messages: strings quoted verbatim,
/// anything else as compact JSON.
pub fn describe_value(value: Option<&Value>) -> String {
    match value {
        None => "<missing>".to_string(),
        Some(Value::String(s)) => format!("'{s}'"),
        Some(other) => other.to_string(),
    }
}

/// JSON type name used in messages.
pub const fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
