pub mod domain;
pub mod modules;

pub use domain::{IsbnError, IsbnKind, Reason, Validation};
pub use modules::isbn::{Isbn, validate, validate_str};
