//! Dotted/indexed path access into decoded JSON
//!
//! Paths name a node inside a `serde_json::Value`: `name`, `data.email`,
//! `[1].status`, `items[0].tags[2].name`. Field names are separated by `.`;
//! array indices are written `[n]` and may follow a field or another index
//! directly.

use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::PathError;

static NULL: Value = Value::Null;

fn is_field_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '$')
}

/// One step of a JSON path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Object member lookup
    Field(String),
    /// Array element lookup
    Index(usize),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => write!(f, "{}", name),
            Self::Index(index) => write!(f, "[{}]", index),
        }
    }
}

/// A parsed JSON path expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonPath {
    raw: String,
    segments: Vec<Segment>,
}

impl JsonPath {
    /// Parse a path expression
    ///
    /// # Errors
    ///
    /// Returns `PathError::Syntax` for empty paths, empty field names
    /// (`a..b`, a trailing `.`), field names outside `[A-Za-z0-9_$-]`,
    /// unclosed or empty brackets and indices that are not plain digits.
    pub fn parse(expr: &str) -> Result<Self, PathError> {
        let syntax = |reason: &str| PathError::Syntax {
            path: expr.to_string(),
            reason: reason.to_string(),
        };

        if expr.trim().is_empty() {
            return Err(syntax("path is empty"));
        }

        let mut segments = Vec::new();
        let mut chars = expr.char_indices().peekable();
        // A field is expected at the start and after every `.`
        let mut expect_field = true;

        while let Some(&(start, c)) = chars.peek() {
            match c {
                '[' => {
                    chars.next();
                    let mut digits = String::new();
                    let mut closed = false;
                    for (_, d) in chars.by_ref() {
                        if d == ']' {
                            closed = true;
                            break;
                        }
                        digits.push(d);
                    }
                    if !closed {
                        return Err(syntax("unclosed `[`"));
                    }
                    let digits = digits.trim();
                    if digits.is_empty() {
                        return Err(syntax("empty index `[]`"));
                    }
                    if !digits.bytes().all(|b| b.is_ascii_digit()) {
                        return Err(syntax(&format!("index `{}` is not a non-negative integer", digits)));
                    }
                    let index = digits
                        .parse::<usize>()
                        .map_err(|_| syntax(&format!("index `{}` is not a non-negative integer", digits)))?;
                    segments.push(Segment::Index(index));
                    expect_field = false;
                }
                '.' => {
                    if expect_field {
                        return Err(syntax("empty field name"));
                    }
                    chars.next();
                    expect_field = true;
                }
                ']' => return Err(syntax("unexpected `]`")),
                _ => {
                    if !expect_field {
                        return Err(syntax("missing `.` before field name"));
                    }
                    let mut end = start;
                    while let Some(&(i, ch)) = chars.peek() {
                        if ch == '.' || ch == '[' || ch == ']' {
                            break;
                        }
                        if !is_field_char(ch) {
                            return Err(syntax(&format!("invalid character `{}` in field name", ch)));
                        }
                        end = i + ch.len_utf8();
                        chars.next();
                    }
                    segments.push(Segment::Field(expr[start..end].to_string()));
                    expect_field = false;
                }
            }
        }

        if expect_field {
            return Err(syntax("path ends with `.`"));
        }

        Ok(Self {
            raw: expr.to_string(),
            segments,
        })
    }

    /// Segments in evaluation order
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The expression this path was parsed from
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Walk `root` along this path
    ///
    /// An explicit JSON `null` at the final segment resolves successfully;
    /// a member that is absent does not.
    pub fn resolve<'v>(&self, root: &'v Value) -> Result<&'v Value, PathError> {
        self.walk(root, false)
    }

    /// Walk `root` along this path, reading an absent final member as `null`
    ///
    /// Every intermediate step must still exist, so `[1].name` on a
    /// one-element array fails while `[1].name` on `[{}, {}]` yields `null`.
    pub fn resolve_or_null<'v>(&self, root: &'v Value) -> Result<&'v Value, PathError> {
        self.walk(root, true)
    }

    fn walk<'v>(&self, root: &'v Value, absent_last_is_null: bool) -> Result<&'v Value, PathError> {
        let mut current = root;
        let last = self.segments.len().saturating_sub(1);

        for (position, segment) in self.segments.iter().enumerate() {
            current = match (segment, current) {
                (Segment::Field(name), Value::Object(map)) => match map.get(name) {
                    Some(value) => value,
                    None if absent_last_is_null && position == last => &NULL,
                    None => {
                        return Err(PathError::MissingField {
                            path: self.raw.clone(),
                            field: name.clone(),
                        })
                    }
                },
                (Segment::Index(index), Value::Array(items)) => {
                    items.get(*index).ok_or_else(|| PathError::IndexOutOfBounds {
                        path: self.raw.clone(),
                        index: *index,
                        len: items.len(),
                    })?
                }
                (segment, other) => {
                    return Err(PathError::NotAContainer {
                        path: self.raw.clone(),
                        segment: segment.to_string(),
                        found: kind_of(other),
                    })
                }
            };
        }

        Ok(current)
    }
}

impl FromStr for JsonPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Parse `expr` and resolve it against `root`
pub fn lookup<'v>(root: &'v Value, expr: &str) -> Result<&'v Value, PathError> {
    JsonPath::parse(expr)?.resolve(root)
}

/// Parse `expr` and resolve it against `root`, with an absent final member
/// read as `null`
pub fn lookup_or_null<'v>(root: &'v Value, expr: &str) -> Result<&'v Value, PathError> {
    JsonPath::parse(expr)?.resolve_or_null(root)
}

/// Resolve `expr` to a string
pub fn lookup_str<'v>(root: &'v Value, expr: &str) -> Result<&'v str, PathError> {
    let value = lookup(root, expr)?;
    value.as_str().ok_or_else(|| PathError::UnexpectedType {
        path: expr.to_string(),
        expected: "string",
        found: kind_of(value),
    })
}

/// Resolve `expr` to a signed integer
pub fn lookup_i64(root: &Value, expr: &str) -> Result<i64, PathError> {
    let value = lookup(root, expr)?;
    value.as_i64().ok_or_else(|| PathError::UnexpectedType {
        path: expr.to_string(),
        expected: "integer",
        found: kind_of(value),
    })
}

/// Render a value for human-readable output
///
/// Strings are written without quotes; every other value is written as
/// compact JSON, so a `null` prints as `null`.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// JSON type name used in error messages
pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
