//! Author and book payload validation
//!
//! Validation runs before any repository call, so a rejected payload never
//! causes a partial write. Book checks run in a fixed order and the first
//! failure wins:
//!
//! 1. `title` is a non-empty string after trimming
//! 2. `authorId` is present and numeric
//! 3. `authorId` names an existing author
//! 4. `year`, when present, is numeric

use serde_json::{Map, Value};

use super::errors::{ValidationError, ValidationResult};
use crate::catalog::{AuthorRepository, BookDraft};

/// Validated author payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorInput {
    pub name: String,
    pub bio: Option<String>,
}

/// Validated book payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookInput {
    pub title: String,
    pub year: Option<i64>,
    pub author_id: i64,
}

impl From<BookInput> for BookDraft {
    fn from(input: BookInput) -> Self {
        BookDraft {
            title: input.title,
            year: input.year,
            author_id: input.author_id,
        }
    }
}

/// Validates request bodies against the author table.
pub struct PayloadValidator<'a> {
    authors: &'a AuthorRepository,
}

impl<'a> PayloadValidator<'a> {
    pub fn new(authors: &'a AuthorRepository) -> Self {
        Self { authors }
    }

    /// Validates an author body. `bio` is unconstrained.
    pub fn validate_author(body: &Value) -> ValidationResult<AuthorInput> {
        let obj = as_object(body)?;
        let name = non_empty_string(obj, "name").ok_or(ValidationError::NameRequired)?;

        Ok(AuthorInput {
            name,
            bio: bio_text(obj.get("bio")),
        })
    }

    /// Validates a book body, including the author reference.
    pub fn validate_book(&self, body: &Value) -> ValidationResult<BookInput> {
        let obj = as_object(body)?;
        let title = non_empty_string(obj, "title").ok_or(ValidationError::TitleRequired)?;

        let author_id = obj
            .get("authorId")
            .and_then(as_integer)
            .ok_or(ValidationError::AuthorIdRequired)?;

        if !self.authors.exists(author_id) {
            return Err(ValidationError::UnknownAuthor(author_id));
        }

        let year = match obj.get("year") {
            None | Some(Value::Null) => None,
            Some(value) => Some(as_integer(value).ok_or(ValidationError::YearNotWhole)?),
        };

        Ok(BookInput {
            title,
            year,
            author_id,
        })
    }
}

fn as_object(body: &Value) -> ValidationResult<&Map<String, Value>> {
    body.as_object().ok_or(ValidationError::BodyNotObject)
}

fn non_empty_string(obj: &Map<String, Value>, field: &str) -> Option<String> {
    let trimmed = obj.get(field)?.as_str()?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Integers, or strings holding one. Fractional numbers are rejected since
/// ids and years are whole.
fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Strings are kept as-is, other JSON values as their JSON text.
fn bio_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
