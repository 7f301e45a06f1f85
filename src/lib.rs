//! bookshelf - an in-memory author and book catalog served over HTTP
//!
//! Layers, leaves first: `store` (generic tables), `catalog` (repositories
//! and the author cascade), `validation`, `query` (book listing pipeline),
//! `library` (the service facade), `http_server` (axum transport).

pub mod catalog;
pub mod cli;
pub mod error;
pub mod http_server;
pub mod library;
pub mod observability;
pub mod query;
pub mod store;
pub mod validation;

pub use error::{AppError, AppResult, ErrorKind};
pub use library::Library;
