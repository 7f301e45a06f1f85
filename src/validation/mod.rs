//! Request payload validation
//!
//! Checks shape, types and the author foreign key before a write is
//! attempted.

mod errors;
mod validator;

pub use errors::{ValidationError, ValidationResult};
pub use validator::{AuthorInput, BookInput, PayloadValidator};
