//! Catalog records

use serde::{Deserialize, Serialize};

use crate::store::Record;

/// An author. `name` is stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl Record for Author {
    fn id(&self) -> i64 {
        self.id
    }
}

/// A book owned by exactly one author. `title` is stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i64>,
    pub author_id: i64,
}

impl Record for Book {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Case-insensitive comparison key for names and titles
pub(crate) fn fold(s: &str) -> String {
    s.trim().to_lowercase()
}
