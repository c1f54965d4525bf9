//! Domain error types
//!
//! Only the typed parser reports errors. The `validate` entry points fold every
//! outcome into a [`Validation`](super::Validation) instead.

use std::fmt;

use super::validation::IsbnKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IsbnError {
    /// Not text, or text matching neither the ISBN-10 nor the ISBN-13 shape
    WrongFormat,
    /// Recognized shape whose check digit does not verify
    ValidationFailed { kind: IsbnKind },
}

impl fmt::Display for IsbnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IsbnError::WrongFormat => write!(f, "Wrong format: not an ISBN-10 or ISBN-13"),
            IsbnError::ValidationFailed { kind } => {
                write!(f, "Validation failed: bad {} check digit", kind)
            }
        }
    }
}

impl std::error::Error for IsbnError {}
