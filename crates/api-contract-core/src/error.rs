//! Error types for path access and assertions

use thiserror::Error;

/// Errors raised while parsing or resolving a JSON path
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The path expression is malformed
    #[error("Invalid JSON path `{path}`: {reason}")]
    Syntax { path: String, reason: String },

    /// An object has no member with the requested name
    #[error("JSON path `{path}`: no field `{field}`")]
    MissingField { path: String, field: String },

    /// An array is shorter than the requested index
    #[error("JSON path `{path}`: index [{index}] out of bounds (length {len})")]
    IndexOutOfBounds {
        path: String,
        index: usize,
        len: usize,
    },

    /// A segment tried to step into a value that is not an object or array
    #[error("JSON path `{path}`: cannot apply `{segment}` to {found}")]
    NotAContainer {
        path: String,
        segment: String,
        found: &'static str,
    },

    /// The resolved value is not of the requested type
    #[error("JSON path `{path}`: expected {expected}, found {found}")]
    UnexpectedType {
        path: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// A failed comparison, naming both sides
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssertionError {
    /// `equals` failed
    #[error("{subject}: expected {expected} but was {actual}")]
    NotEqual {
        subject: String,
        expected: String,
        actual: String,
    },

    /// `contains_substring` failed
    #[error("{subject}: expected a string containing \"{needle}\" but was \"{actual}\"")]
    MissingSubstring {
        subject: String,
        needle: String,
        actual: String,
    },

    /// `is` failed
    #[error("{subject}: expected is <{expected}> but was <{actual}>")]
    NotIdentical {
        subject: String,
        expected: i64,
        actual: i64,
    },
}

impl AssertionError {
    /// Name of the value that failed the comparison
    pub fn subject(&self) -> &str {
        match self {
            Self::NotEqual { subject, .. }
            | Self::MissingSubstring { subject, .. }
            | Self::NotIdentical { subject, .. } => subject,
        }
    }
}
