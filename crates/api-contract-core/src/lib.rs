//! Core contract types for the API contract suite
//!
//! This crate contains the request/response models of the services under
//! test, the JSON path accessor used to read fields out of decoded
//! responses, and the assertion primitives that decide whether a case passed.

pub mod assertions;
pub mod error;
pub mod json_path;
pub mod pet;
pub mod reqres;

// Re-exports for convenience
pub use assertions::{contains_substring, equals, is};
pub use error::{AssertionError, PathError};
pub use json_path::{lookup, lookup_i64, lookup_or_null, lookup_str, render_value, JsonPath, Segment};
pub use pet::{Category, Pet, PetStatus, Tag};
pub use reqres::{LoginRequest, LoginResponse, User, UserEnvelope};
