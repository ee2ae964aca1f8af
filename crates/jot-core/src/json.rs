//! Conversion of parsed values into `serde_json` trees.
//!
//! The document tree keeps source fidelity: escapes stay undecoded and
//! duplicate object keys stay in place. Embedding hosts usually want real
//! data instead, so the conversion decodes the accepted escape set, lets the
//! last duplicate key win, and keeps attribute insertion order.

use crate::ast::{Document, Value};

impl Value {
    /// Convert to a `serde_json::Value`, decoding string escapes (keys too).
    ///
    /// A non-finite number (reachable through literals like `1e999`) becomes
    /// JSON `null`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Number { value, .. } => serde_json::Number::from_f64(*value)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(raw) => serde_json::Value::String(unescape(raw)),
            Value::Boolean(value) => serde_json::Value::Bool(*value),
            Value::Array(elements) => {
                serde_json::Value::Array(elements.iter().map(Value::to_json).collect())
            }
            Value::Object(attributes) => {
                let mut map = serde_json::Map::new();
                for attribute in attributes {
                    map.insert(unescape(&attribute.key), attribute.value.to_json());
                }
                serde_json::Value::Object(map)
            }
        }
    }
}

impl Document {
    /// Convert every top-level value, in order.
    pub fn to_json(&self) -> Vec<serde_json::Value> {
        self.values.iter().map(Value::to_json).collect()
    }
}

/// Decode the accepted escape set `" / \ b f n r t`. Anything else is kept
/// as a literal backslash pair; the tokenizer has already rejected those
/// spans.
fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('"') => out.push('"'),
                Some('/') => out.push('/'),
                Some('\\') => out.push('\\'),
                Some('b') => out.push('\u{0008}'),
                Some('f') => out.push('\u{000C}'),
                Some('n') => out.push('\n'),
                Some('r') => out.push('\r'),
                Some('t') => out.push('\t'),
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                None => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }
    out
}
