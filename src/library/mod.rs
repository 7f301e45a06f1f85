//! # Library Service
//!
//! Owns the author and book tables and runs every request-level operation:
//! validation first, then the repository call, then (for listings) the query
//! engine.
//!
//! Each table sits behind its own mutex. Whenever both are needed the author
//! lock is taken first, and book writes and the author cascade hold both for
//! their whole duration, so no book ever references a missing author.

mod service;

pub use service::Library;
