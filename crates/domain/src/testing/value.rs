//! JSON value helpers used by assertion evaluation.

use serde_json::Value;

/// Walks `value` one path segment at a time.
///
/// Objects are indexed by key and arrays by numeric segment. Returns `None`
/// as soon as a segment is missing or the current value cannot be indexed.
#[must_use]
pub fn lookup<'a, S: AsRef<str>>(value: &'a Value, path: &[S]) -> Option<&'a Value> {
    path.iter().try_fold(value, |current, segment| {
        let segment = segment.as_ref();
        match current {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        }
    })
}

/// Strict equality between two possibly-absent values.
///
/// Types must match; numbers compare by numeric value. Arrays and objects
/// never compare equal, since expectations are scalars.
#[must_use]
pub fn strict_eq(actual: Option<&Value>, expected: Option<&Value>) -> bool {
    match (actual, expected) {
        (None, None) => true,
        (Some(a), Some(e)) => match (a, e) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(e)) => a == e,
            (Value::String(a), Value::String(e)) => a == e,
            (Value::Number(a), Value::Number(e)) => match (a.as_f64(), e.as_f64()) {
                (Some(a), Some(e)) => a == e,
                _ => a == e,
            },
            _ => false,
        },
        _ => false,
    }
}

/// Renders a possibly-absent value for failure messages.
///
/// Absent values render as `undefined`, strings are not quoted and
/// integral floats drop their fraction (`42.0` renders as `42`).
#[must_use]
pub fn render(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) if n.is_f64() => n
            .as_f64()
            .map_or_else(|| n.to_string(), |f| f.to_string()),
        Some(other) => other.to_string(),
    }
}
