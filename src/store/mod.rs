//! In-memory table storage
//!
//! A table is an ordered sequence of records. Insertion order is preserved
//! and is the order every listing operation observes.
//!
//! Ids are assigned by the caller from `next_id()`, which is `max + 1`.
//! Deleting the highest id and inserting again hands that id out a second
//! time, so ids must not be treated as long-lived external references.

mod table;

pub use table::{EntityStore, Record};
