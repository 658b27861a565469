//! Dynamically typed items for heterogeneous lists.

use crate::error::{PrepError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single item of a heterogeneous list.
///
/// Serializes to plain JSON. NaN floats render as `null`, since JSON has no
/// representation for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<Value>),
}

impl Value {
    /// Returns true for `Null`, the empty string, and NaN.
    pub fn is_missing(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Text(s) => s.is_empty(),
            Value::Float(f) => f.is_nan(),
            Value::Bool(_) | Value::Int(_) | Value::List(_) => false,
        }
    }

    /// Interpret a command-line token as the narrowest scalar it spells.
    ///
    /// Integers win over floats; anything that is not a finite number stays
    /// text, so `"nan"` and `"inf"` are kept verbatim.
    pub fn from_token(token: &str) -> Self {
        if let Ok(i) = token.parse::<i64>() {
            return Value::Int(i);
        }
        match token.parse::<f64>() {
            Ok(f) if f.is_finite() => Value::Float(f),
            _ => Value::Text(token.to_string()),
        }
    }

    /// Parse a literal such as `[1, 2]`, `"a"`, or `['a', None]`.
    ///
    /// JSON is accepted as is. Python spellings are rewritten first:
    /// single-quoted strings, `None`, `True` and `False`.
    pub fn parse_literal(input: &str) -> Result<Self> {
        let json = python_to_json(input).unwrap_or_else(|| input.to_string());
        serde_json::from_str(&json).map_err(|e| PrepError::InvalidLiteral {
            input: input.to_string(),
            message: e.to_string(),
        })
    }

    /// Short type name, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::List(_) => "list",
        }
    }
}

/// Rewrite Python literal spellings into JSON.
///
/// Returns `None` on an unterminated string so the JSON parser reports the
/// error against the original input.
fn python_to_json(input: &str) -> Option<String> {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\'' => {
                out.push('"');
                loop {
                    match chars.next()? {
                        '\'' => break,
                        '\\' => match chars.next()? {
                            '\'' => out.push('\''),
                            escaped => {
                                out.push('\\');
                                out.push(escaped);
                            }
                        },
                        '"' => out.push_str("\\\""),
                        other => out.push(other),
                    }
                }
                out.push('"');
            }
            '"' => {
                out.push('"');
                loop {
                    let next = chars.next()?;
                    out.push(next);
                    match next {
                        '"' => break,
                        '\\' => out.push(chars.next()?),
                        _ => {}
                    }
                }
            }
            c if c.is_alphanumeric() || c == '_' => {
                let mut word = String::from(c);
                while let Some(&next) = chars.peek() {
                    if !(next.is_alphanumeric() || next == '_' || next == '.') {
                        break;
                    }
                    word.push(next);
                    chars.next();
                }
                match word.as_str() {
                    "None" => out.push_str("null"),
                    "True" => out.push_str("true"),
                    "False" => out.push_str("false"),
                    _ => out.push_str(&word),
                }
            }
            other => out.push(other),
        }
    }
    Some(out)
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
