//! Assertion primitives
//!
//! Each primitive compares an actual value against an expected reference and
//! returns an `AssertionError` naming both when they differ. Callers propagate
//! the error with `?`, so the first failing check ends the case.

use serde::Serialize;

use crate::error::AssertionError;

/// Assert that `actual` equals `expected`
///
/// Works for any serialisable primitive: strings, integers and decoded
/// `serde_json::Value`s. Both sides are rendered as JSON in the failure
/// message so strings appear quoted.
pub fn equals<A, E>(subject: &str, actual: &A, expected: &E) -> Result<(), AssertionError>
where
    A: PartialEq<E> + Serialize + ?Sized,
    E: Serialize + ?Sized,
{
    if actual == expected {
        return Ok(());
    }

    Err(AssertionError::NotEqual {
        subject: subject.to_string(),
        expected: render(expected),
        actual: render(actual),
    })
}

/// Assert that `actual` contains `needle`
pub fn contains_substring(subject: &str, actual: &str, needle: &str) -> Result<(), AssertionError> {
    if actual.contains(needle) {
        return Ok(());
    }

    Err(AssertionError::MissingSubstring {
        subject: subject.to_string(),
        needle: needle.to_string(),
        actual: actual.to_string(),
    })
}

/// Assert that the integer `actual` is `expected`
pub fn is<T>(subject: &str, actual: T, expected: T) -> Result<(), AssertionError>
where
    T: Into<i64> + Copy + PartialEq,
{
    if actual == expected {
        return Ok(());
    }

    Err(AssertionError::NotIdentical {
        subject: subject.to_string(),
        expected: expected.into(),
        actual: actual.into(),
    })
}

fn render<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "<unrenderable>".to_string())
}
