//! The document tree built by the parser, and its canonical text rendering.
//!
//! The tree is plain owned data: every array/object exclusively owns its
//! children, there are no cycles and nothing is shared. It is built once
//! during parsing and not mutated afterwards.

use std::fmt;

/// One parsed value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A number. Keeps the source literal alongside the parsed value so
    /// rendering reproduces the exact spelling (`0.48e-8` stays `0.48e-8`).
    Number { literal: String, value: f64 },
    /// The raw span between a string literal's quotes. Escape sequences are
    /// validated by the tokenizer but stored and rendered undecoded.
    String(String),
    Boolean(bool),
    /// Elements in source order.
    Array(Vec<Value>),
    /// Attributes in source order. Duplicate keys are kept as written; this
    /// is a sequence of pairs, not a map.
    Object(Vec<Attribute>),
}

/// A key/value pair inside an object.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub key: String,
    pub value: Value,
}

/// An ordered sequence of top-level values. The grammar permits several
/// consecutive values in one input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub values: Vec<Value>,
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number { literal, .. } => f.write_str(literal),
            Value::String(raw) => write!(f, "\"{raw}\""),
            Value::Boolean(value) => write!(f, "{value}"),
            Value::Array(elements) => {
                f.write_str("[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_str("]")
            }
            Value::Object(attributes) => {
                f.write_str("{")?;
                for (i, attribute) in attributes.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{attribute}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl fmt::Display for Attribute {
    /// Keys always render double-quoted, with no space after the colon.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\":{}", self.key, self.value)
    }
}

impl fmt::Display for Document {
    /// One top-level value per line, no trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}
