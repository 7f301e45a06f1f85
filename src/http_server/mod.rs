//! # HTTP Server Module
//!
//! Axum transport for the library.
//!
//! # Endpoints
//!
//! - `/` - Health check
//! - `/authors`, `/authors/:id`, `/authors/:id/books`
//! - `/books`, `/books/:id`

pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod routes;
pub mod server;

pub use config::HttpServerConfig;
pub use server::{build_router, HttpServer};
