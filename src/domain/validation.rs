use std::fmt;

use serde::{Deserialize, Serialize};

use super::errors::IsbnError;

/// Which of the two ISBN forms a candidate was classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IsbnKind {
    #[serde(rename = "ISBN-10")]
    Isbn10,
    #[serde(rename = "ISBN-13")]
    Isbn13,
}

impl fmt::Display for IsbnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IsbnKind::Isbn10 => write!(f, "ISBN-10"),
            IsbnKind::Isbn13 => write!(f, "ISBN-13"),
        }
    }
}

/// Reason attached to every validation result.
///
/// The serialized and displayed forms are the literal tokens existing
/// consumers match on, so they must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reason {
    #[serde(rename = "wrong format")]
    WrongFormat,
    #[serde(rename = "validation failed")]
    ValidationFailed,
    #[serde(rename = "validation pass")]
    ValidationPass,
}

impl Reason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Reason::WrongFormat => "wrong format",
            Reason::ValidationFailed => "validation failed",
            Reason::ValidationPass => "validation pass",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single validation call: a validity flag and its reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    pub valid: bool,
    pub reason: Reason,
}

impl Validation {
    pub fn pass() -> Self {
        Self {
            valid: true,
            reason: Reason::ValidationPass,
        }
    }

    pub fn failed() -> Self {
        Self {
            valid: false,
            reason: Reason::ValidationFailed,
        }
    }

    pub fn wrong_format() -> Self {
        Self {
            valid: false,
            reason: Reason::WrongFormat,
        }
    }

    /// Pass when `verified`, otherwise a checksum failure.
    pub fn from_checksum(verified: bool) -> Self {
        if verified { Self::pass() } else { Self::failed() }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn reason(&self) -> Reason {
        self.reason
    }

    /// `(valid, reason)` with the reason as its literal token.
    pub fn into_pair(self) -> (bool, &'static str) {
        (self.valid, self.reason.as_str())
    }
}

impl From<IsbnError> for Validation {
    fn from(e: IsbnError) -> Self {
        match e {
            IsbnError::WrongFormat => Validation::wrong_format(),
            IsbnError::ValidationFailed { .. } => Validation::failed(),
        }
    }
}
