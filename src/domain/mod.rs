//! Domain layer - Pure result and error types
//!
//! No parsing logic lives here, only the values the validator hands back.

pub mod errors;
pub mod validation;

pub use errors::IsbnError;
pub use validation::{IsbnKind, Reason, Validation};
