//! Author table with case-insensitive name uniqueness

use super::errors::{CatalogError, CatalogResult};
use super::model::{fold, Author};
use crate::store::EntityStore;

/// Owns the author table.
///
/// Deleting an author is not exposed here because it must also remove the
/// author's books; see [`super::CascadeCoordinator`].
#[derive(Debug, Default)]
pub struct AuthorRepository {
    table: EntityStore<Author>,
}

impl AuthorRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an author. The name is trimmed before storing.
    pub fn create(&mut self, name: &str, bio: Option<String>) -> CatalogResult<Author> {
        let name = name.trim();
        self.ensure_unique_name(name, None)?;

        let author = Author {
            id: self.table.next_id(),
            name: name.to_string(),
            bio,
        };
        self.table.insert(author.clone());
        Ok(author)
    }

    /// Replace name and bio of an existing author
    pub fn update(&mut self, id: i64, name: &str, bio: Option<String>) -> CatalogResult<Author> {
        if !self.exists(id) {
            return Err(CatalogError::AuthorNotFound(id));
        }
        let name = name.trim();
        self.ensure_unique_name(name, Some(id))?;

        let author = self
            .table
            .find_by_id_mut(id)
            .ok_or(CatalogError::AuthorNotFound(id))?;
        author.name = name.to_string();
        author.bio = bio;
        Ok(author.clone())
    }

    pub fn get(&self, id: i64) -> CatalogResult<Author> {
        self.table
            .find_by_id(id)
            .cloned()
            .ok_or(CatalogError::AuthorNotFound(id))
    }

    pub fn exists(&self, id: i64) -> bool {
        self.table.find_by_id(id).is_some()
    }

    /// All authors in insertion order
    pub fn list(&self) -> Vec<Author> {
        self.table.all()
    }

    /// Borrowing view of the table, used by the query engine
    pub fn iter(&self) -> impl Iterator<Item = &Author> {
        self.table.iter()
    }

    /// Drop the author record only. Callers go through the cascade.
    pub(super) fn remove(&mut self, id: i64) -> CatalogResult<Author> {
        self.table
            .remove(id)
            .ok_or(CatalogError::AuthorNotFound(id))
    }

    fn ensure_unique_name(&self, name: &str, exclude: Option<i64>) -> CatalogResult<()> {
        let key = fold(name);
        let taken = self
            .table
            .iter()
            .any(|a| Some(a.id) != exclude && fold(&a.name) == key);
        if taken {
            return Err(CatalogError::DuplicateName(name.to_string()));
        }
        Ok(())
    }
}
