//! Author deletion with dependent book removal

use super::author_repo::AuthorRepository;
use super::book_repo::BookRepository;
use super::errors::{CatalogError, CatalogResult};
use super::model::Author;

/// Outcome of a cascading author delete
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeOutcome {
    pub author: Author,
    pub removed_books: usize,
}

/// Deletes an author together with every book that references it.
///
/// Books are removed before the author, so at no step boundary does the book
/// table reference a missing author. A missing author fails before anything
/// is touched.
pub struct CascadeCoordinator;

impl CascadeCoordinator {
    pub fn delete_author_cascade(
        authors: &mut AuthorRepository,
        books: &mut BookRepository,
        id: i64,
    ) -> CatalogResult<CascadeOutcome> {
        if !authors.exists(id) {
            return Err(CatalogError::AuthorNotFound(id));
        }

        let removed_books = books.remove_by_author(id).len();
        let author = authors.remove(id)?;

        Ok(CascadeOutcome {
            author,
            removed_books,
        })
    }
}
