//! Catalog error types
//!
//! Failures raised by the repositories and the cascade coordinator. Each
//! variant carries enough context to build the client-facing message.

use thiserror::Error;

use crate::error::ErrorKind;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Repository and cascade failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No author with this id
    #[error("Author not found")]
    AuthorNotFound(i64),

    /// No book with this id
    #[error("Book not found")]
    BookNotFound(i64),

    /// Another author already has this name (case-insensitive)
    #[error("An author named '{0}' already exists")]
    DuplicateName(String),

    /// The author already has a book with this title (case-insensitive)
    #[error("Author {author_id} already has a book titled '{title}'")]
    DuplicateBook { title: String, author_id: i64 },

    /// Book write references an author that does not exist
    #[error("Author {0} does not exist")]
    InvalidAuthorRef(i64),
}

impl CatalogError {
    /// Classification used by the HTTP boundary
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::AuthorNotFound(_) | CatalogError::BookNotFound(_) => ErrorKind::NotFound,
            CatalogError::DuplicateName(_) | CatalogError::DuplicateBook { .. } => {
                ErrorKind::Conflict
            }
            CatalogError::InvalidAuthorRef(_) => ErrorKind::Validation,
        }
    }
}
