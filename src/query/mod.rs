//! # Book Queries
//!
//! Listing parameters and the filter, sort and paginate pipeline that
//! serves `GET /books`.

mod engine;
mod params;

pub use engine::BookQueryEngine;
pub use params::{BookQuery, Pagination, SortDirection, SortField, SortSpec};
