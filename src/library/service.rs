//! Library facade over the catalog tables

use std::sync::{Mutex, MutexGuard};

use serde_json::Value;
use tracing::{debug, info};

use crate::catalog::{
    Author, AuthorRepository, Book, BookRepository, CascadeCoordinator, CatalogError,
};
use crate::error::{AppError, AppResult};
use crate::query::{BookQuery, BookQueryEngine};
use crate::validation::PayloadValidator;

/// In-process author and book catalog
#[derive(Debug, Default)]
pub struct Library {
    authors: Mutex<AuthorRepository>,
    books: Mutex<BookRepository>,
}

fn lock<'a, T>(mutex: &'a Mutex<T>, table: &str) -> AppResult<MutexGuard<'a, T>> {
    mutex
        .lock()
        .map_err(|_| AppError::internal(format!("{} table lock poisoned", table)))
}

impl Library {
    /// Empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    // ==================
    // Authors
    // ==================

    pub fn create_author(&self, body: &Value) -> AppResult<Author> {
        let input = PayloadValidator::validate_author(body)?;
        let author = lock(&self.authors, "author")?.create(&input.name, input.bio)?;

        info!(author_id = author.id, name = %author.name, "author created");
        Ok(author)
    }

    pub fn list_authors(&self) -> AppResult<Vec<Author>> {
        Ok(lock(&self.authors, "author")?.list())
    }

    pub fn get_author(&self, id: i64) -> AppResult<Author> {
        Ok(lock(&self.authors, "author")?.get(id)?)
    }

    pub fn update_author(&self, id: i64, body: &Value) -> AppResult<Author> {
        let input = PayloadValidator::validate_author(body)?;
        let author = lock(&self.authors, "author")?.update(id, &input.name, input.bio)?;

        info!(author_id = author.id, name = %author.name, "author updated");
        Ok(author)
    }

    /// Deletes the author and every book it owns
    pub fn delete_author(&self, id: i64) -> AppResult<Author> {
        let mut authors = lock(&self.authors, "author")?;
        let mut books = lock(&self.books, "book")?;

        let outcome = CascadeCoordinator::delete_author_cascade(&mut authors, &mut books, id)?;

        info!(
            author_id = outcome.author.id,
            removed_books = outcome.removed_books,
            "author deleted"
        );
        Ok(outcome.author)
    }

    /// Books of one author. A missing author is an error, not an empty list.
    pub fn books_by_author(&self, author_id: i64) -> AppResult<Vec<Book>> {
        let authors = lock(&self.authors, "author")?;
        if !authors.exists(author_id) {
            return Err(CatalogError::AuthorNotFound(author_id).into());
        }
        Ok(lock(&self.books, "book")?.list_by_author(author_id))
    }

    // ==================
    // Books
    // ==================

    pub fn create_book(&self, body: &Value) -> AppResult<Book> {
        let authors = lock(&self.authors, "author")?;
        let input = PayloadValidator::new(&authors).validate_book(body)?;
        ensure_author(&authors, input.author_id)?;

        let book = lock(&self.books, "book")?.create(input.into())?;

        info!(book_id = book.id, author_id = book.author_id, title = %book.title, "book created");
        Ok(book)
    }

    /// Filtered, sorted and paginated book listing
    pub fn list_books(&self, params: &BookQuery) -> AppResult<Vec<Book>> {
        let authors = lock(&self.authors, "author")?.list();
        let books = lock(&self.books, "book")?.all();

        let result = BookQueryEngine::query(books, &authors, params);
        debug!(?params, returned = result.len(), "books listed");
        Ok(result)
    }

    pub fn get_book(&self, id: i64) -> AppResult<Book> {
        Ok(lock(&self.books, "book")?.get(id)?)
    }

    pub fn update_book(&self, id: i64, body: &Value) -> AppResult<Book> {
        let authors = lock(&self.authors, "author")?;
        let input = PayloadValidator::new(&authors).validate_book(body)?;
        ensure_author(&authors, input.author_id)?;

        let book = lock(&self.books, "book")?.update(id, input.into())?;

        info!(book_id = book.id, author_id = book.author_id, title = %book.title, "book updated");
        Ok(book)
    }

    pub fn delete_book(&self, id: i64) -> AppResult<Book> {
        let book = lock(&self.books, "book")?.delete(id)?;

        info!(book_id = book.id, "book deleted");
        Ok(book)
    }
}

/// Repository-level re-check of the author reference
fn ensure_author(authors: &AuthorRepository, author_id: i64) -> Result<(), CatalogError> {
    if authors.exists(author_id) {
        Ok(())
    } else {
        Err(CatalogError::InvalidAuthorRef(author_id))
    }
}
