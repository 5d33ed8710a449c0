//! Lexical encoding of identifiers and values into PostgreSQL SQL text.
//!
//! This is the leaf layer everything else is built on: the AST compiler
//! never writes a quote or an escape sequence itself, it always asks
//! [`escape_identifier`] or [`escape_value`] to do it.

use crate::error::{Error, Result};
use crate::value::Value;

/// Quote and join identifier path segments per PostgreSQL rules.
///
/// Each argument is first split on `.`; the resulting sub-parts are
/// concatenated across all arguments, empty sub-parts are dropped, and
/// each survivor is either emitted bare (the `*` wildcard) or wrapped in
/// double quotes with embedded `"` doubled. A NUL byte anywhere fails.
pub fn escape_identifier<S: AsRef<str>>(parts: &[S]) -> Result<String> {
    let mut segments: Vec<&str> = Vec::new();
    for part in parts {
        let part = part.as_ref();
        if part.contains('\0') {
            return Err(Error::invalid_identifier(part, "contains NUL byte"));
        }
        segments.extend(part.split('.').filter(|s| !s.is_empty()));
    }

    let rendered: Vec<String> = segments
        .into_iter()
        .map(|segment| {
            if segment == "*" {
                "*".to_string()
            } else {
                format!("\"{}\"", segment.replace('"', "\"\""))
            }
        })
        .collect();

    Ok(rendered.join("."))
}

/// Render a host value as PostgreSQL SQL text, per the dispatch table in
/// the value-escaping rules: `NULL`/`TRUE`/`FALSE`, decimal numbers (with
/// `'NaN'`/`'Infinity'`/`'-Infinity'` specials), plain or `E'...'` escaped
/// strings, `ARRAY[...]` literals (bare `[...]` for nested arrays), and
/// quoted-JSON object literals.
pub fn escape_value(value: &Value) -> Result<String> {
    escape_value_at_depth(value, 0)
}

/// Force `ARRAY[...]` encoding even for a scalar passed to `ArrayValue`:
/// arrays render exactly as [`escape_value`] would, non-arrays are
/// treated as a one-element array.
pub fn escape_array_value(value: &Value) -> Result<String> {
    match value {
        Value::Array(_) => escape_value(value),
        other => escape_value(&Value::Array(vec![other.clone()])),
    }
}

/// Force quoted-JSON encoding even for a scalar passed to `JsonValue`:
/// any value shape is rendered as canonical JSON text wrapped in a
/// single-quoted string literal (doubling embedded `'`).
pub fn escape_json_value(value: &Value) -> Result<String> {
    let json = json_encode(value)?;
    Ok(format!("'{}'", json.replace('\'', "''")))
}

fn escape_value_at_depth(value: &Value, depth: usize) -> Result<String> {
    match value {
        Value::Null => Ok("NULL".to_string()),
        Value::Bool(b) => Ok(if *b { "TRUE" } else { "FALSE" }.to_string()),
        Value::Int(i) => Ok(i.to_string()),
        Value::Float(f) => Ok(escape_float(*f)),
        Value::String(s) => escape_string(s),
        Value::Array(items) => escape_array(items, depth),
        Value::Object(map) => {
            if map.is_empty() {
                return Ok("'{}'".to_string());
            }
            let json = json_encode(value)?;
            Ok(format!("'{}'", json.replace('\'', "''")))
        }
    }
}

fn escape_float(f: f64) -> String {
    if f.is_nan() {
        "'NaN'".to_string()
    } else if f.is_infinite() {
        if f > 0.0 {
            "'Infinity'".to_string()
        } else {
            "'-Infinity'".to_string()
        }
    } else {
        f.to_string()
    }
}

fn escape_array(items: &[Value], depth: usize) -> Result<String> {
    if items.is_empty() {
        return Ok("'{}'".to_string());
    }
    let rendered: Result<Vec<String>> = items
        .iter()
        .map(|item| escape_value_at_depth(item, depth + 1))
        .collect();
    let rendered = rendered?;
    if depth == 0 {
        Ok(format!("ARRAY[{}]", rendered.join(", ")))
    } else {
        Ok(format!("[{}]", rendered.join(", ")))
    }
}

const ESCAPE_TRIGGER_CHARS: [char; 7] = ['\'', '\\', '\u{8}', '\u{c}', '\n', '\r', '\t'];

fn escape_string(s: &str) -> Result<String> {
    if s.contains('\0') {
        return Err(Error::InvalidString(s.to_string()));
    }
    if !s.chars().any(|c| ESCAPE_TRIGGER_CHARS.contains(&c)) {
        return Ok(format!("'{s}'"));
    }
    let mut out = String::with_capacity(s.len() + 4);
    out.push_str("E'");
    for c in s.chars() {
        match c {
            '\'' => out.push_str("\\'"),
            '\\' => out.push_str("\\\\"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out.push('\'');
    Ok(out)
}

/// Canonical (compact, insertion-ordered) JSON encoding used inside
/// object-value literals. Delegates to `serde_json`. [`Value`] already
/// derives `Serialize` (`#[serde(untagged)]`), and `IndexMap`'s own
/// `Serialize` impl preserves insertion order, so there is nothing this
/// layer needs to hand-roll beyond rejecting the NaN/Infinity floats JSON
/// has no representation for, which `serde_json` already does.
fn json_encode(value: &Value) -> Result<String> {
    serde_json::to_string(value)
        .map_err(|e| Error::UnsupportedValue(format!("value is not representable as JSON: {e}")))
}
