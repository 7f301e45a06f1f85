//! Payload validation errors

use thiserror::Error;

/// Result type for payload validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Reasons a request payload is rejected before any mutation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Body is not valid JSON
    #[error("Malformed JSON body: {0}")]
    MalformedJson(String),

    /// Body is JSON but not an object
    #[error("Request body must be a JSON object")]
    BodyNotObject,

    #[error("Name is required and must be a non-empty string")]
    NameRequired,

    #[error("Title is required and must be a non-empty string")]
    TitleRequired,

    #[error("authorId is required and must be a number")]
    AuthorIdRequired,

    /// authorId is numeric but resolves to no author
    #[error("Author {0} does not exist")]
    UnknownAuthor(i64),

    #[error("Year must be a whole number")]
    YearNotWhole,
}
