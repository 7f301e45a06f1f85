//! # Catalog
//!
//! Author and book tables with their integrity rules:
//!
//! - author names are unique, trimmed and compared case-insensitively
//! - (title, author) pairs are unique among books, same comparison
//! - deleting an author removes all of its books

mod author_repo;
mod book_repo;
mod cascade;
mod errors;
mod model;

pub use author_repo::AuthorRepository;
pub use book_repo::{BookDraft, BookRepository};
pub use cascade::{CascadeCoordinator, CascadeOutcome};
pub use errors::{CatalogError, CatalogResult};
pub use model::{Author, Book};
