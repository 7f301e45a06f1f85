//! Book table with (title, author) uniqueness

use super::errors::{CatalogError, CatalogResult};
use super::model::{fold, Book};
use crate::store::EntityStore;

/// Fields accepted by book create and update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDraft {
    pub title: String,
    pub year: Option<i64>,
    pub author_id: i64,
}

/// Owns the book table.
///
/// Author existence is checked by validation before any write reaches this
/// repository. The table itself has no view of authors.
#[derive(Debug, Default)]
pub struct BookRepository {
    table: EntityStore<Book>,
}

impl BookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, draft: BookDraft) -> CatalogResult<Book> {
        let title = draft.title.trim();
        self.ensure_unique(title, draft.author_id, None)?;

        let book = Book {
            id: self.table.next_id(),
            title: title.to_string(),
            year: draft.year,
            author_id: draft.author_id,
        };
        self.table.insert(book.clone());
        Ok(book)
    }

    /// Replace title, year and author of an existing book
    pub fn update(&mut self, id: i64, draft: BookDraft) -> CatalogResult<Book> {
        if self.table.find_by_id(id).is_none() {
            return Err(CatalogError::BookNotFound(id));
        }
        let title = draft.title.trim();
        self.ensure_unique(title, draft.author_id, Some(id))?;

        let book = self
            .table
            .find_by_id_mut(id)
            .ok_or(CatalogError::BookNotFound(id))?;
        book.title = title.to_string();
        book.year = draft.year;
        book.author_id = draft.author_id;
        Ok(book.clone())
    }

    pub fn delete(&mut self, id: i64) -> CatalogResult<Book> {
        self.table.remove(id).ok_or(CatalogError::BookNotFound(id))
    }

    pub fn get(&self, id: i64) -> CatalogResult<Book> {
        self.table
            .find_by_id(id)
            .cloned()
            .ok_or(CatalogError::BookNotFound(id))
    }

    /// Books owned by an author, insertion order
    pub fn list_by_author(&self, author_id: i64) -> Vec<Book> {
        self.table
            .iter()
            .filter(|b| b.author_id == author_id)
            .cloned()
            .collect()
    }

    pub fn all(&self) -> Vec<Book> {
        self.table.all()
    }

    /// Remove every book owned by an author
    pub(super) fn remove_by_author(&mut self, author_id: i64) -> Vec<Book> {
        self.table.remove_where(|b| b.author_id == author_id)
    }

    fn ensure_unique(&self, title: &str, author_id: i64, exclude: Option<i64>) -> CatalogResult<()> {
        let key = fold(title);
        let taken = self
            .table
            .iter()
            .any(|b| Some(b.id) != exclude && b.author_id == author_id && fold(&b.title) == key);
        if taken {
            return Err(CatalogError::DuplicateBook {
                title: title.to_string(),
                author_id,
            });
        }
        Ok(())
    }
}
