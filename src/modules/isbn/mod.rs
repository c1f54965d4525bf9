//! ISBN Validator
//!
//! Normalizes a candidate, classifies it as ISBN-10 or ISBN-13 shaped and runs
//! the matching checksum. Every call is pure: no state, no I/O.
//!
//! ```
//! use isbn_validator::{validate, validate_str};
//! use serde_json::json;
//!
//! assert_eq!(validate(&json!(123)).into_pair(), (false, "wrong format"));
//! assert_eq!(validate_str("978-0-306-40615-7").into_pair(), (true, "validation pass"));
//! ```

mod isbn10;
mod isbn13;
pub mod normalizer;
pub mod shape;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{IsbnError, IsbnKind, Validation};
pub use normalizer::normalize;
pub use shape::{classify, Shape};

/// Validate any JSON-shaped value. Only strings can pass; every other variant
/// is reported as `wrong format` before classification.
pub fn validate(input: &Value) -> Validation {
    match input {
        Value::String(raw) => validate_str(raw),
        other => {
            tracing::debug!(input = %other, "rejecting non-text input");
            Validation::wrong_format()
        }
    }
}

/// Validate a textual ISBN, separators allowed.
pub fn validate_str(raw: &str) -> Validation {
    match Isbn::parse(raw) {
        Ok(_) => Validation::pass(),
        Err(e) => e.into(),
    }
}

/// A checksum-verified ISBN in normalized form (separators removed).
///
/// Serializes as its normalized string; deserializing runs the full validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Isbn {
    Isbn10(String),
    Isbn13(String),
}

impl Isbn {
    pub fn parse(raw: &str) -> Result<Self, IsbnError> {
        let candidate = normalize(raw);
        tracing::trace!(raw, candidate = %candidate, "normalized");

        let (kind, result) = match classify(&candidate) {
            Shape::Isbn10 => (IsbnKind::Isbn10, isbn10::check(&candidate)),
            Shape::Isbn13 => (IsbnKind::Isbn13, isbn13::check(&candidate)),
            Shape::Unrecognized => {
                tracing::debug!(candidate = %candidate, "wrong format");
                return Err(IsbnError::WrongFormat);
            }
        };

        if !result.is_valid() {
            tracing::debug!(%kind, candidate = %candidate, "validation failed");
            return Err(IsbnError::ValidationFailed { kind });
        }

        Ok(match kind {
            IsbnKind::Isbn10 => Isbn::Isbn10(candidate),
            IsbnKind::Isbn13 => Isbn::Isbn13(candidate),
        })
    }

    pub fn kind(&self) -> IsbnKind {
        match self {
            Isbn::Isbn10(_) => IsbnKind::Isbn10,
            Isbn::Isbn13(_) => IsbnKind::Isbn13,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Isbn::Isbn10(s) | Isbn::Isbn13(s) => s,
        }
    }
}

impl FromStr for Isbn {
    type Err = IsbnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Isbn::parse(s)
    }
}

impl TryFrom<String> for Isbn {
    type Error = IsbnError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Isbn::parse(&s)
    }
}

impl From<Isbn> for String {
    fn from(isbn: Isbn) -> Self {
        match isbn {
            Isbn::Isbn10(s) | Isbn::Isbn13(s) => s,
        }
    }
}

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
