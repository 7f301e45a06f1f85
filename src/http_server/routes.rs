//! Author and Book HTTP Routes
//!
//! Thin handlers: parse the path id and body, call the [`Library`], wrap the
//! result. Extractor rejections are converted so every failure carries the
//! same `{"error": "..."}` body.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;

use crate::catalog::{Author, Book};
use crate::error::{AppError, AppResult};
use crate::library::Library;
use crate::query::BookQuery;
use crate::validation::ValidationError;

/// Shared state type
type LibraryState = Arc<Library>;

/// Body of a successful delete
#[derive(Debug, Serialize)]
pub struct DeletedResponse<T: Serialize> {
    pub deleted: T,
}

/// Author and book routes
pub fn library_routes(library: LibraryState) -> Router {
    Router::new()
        .route("/authors", get(list_authors).post(create_author))
        .route(
            "/authors/:id",
            get(get_author).put(update_author).delete(delete_author),
        )
        .route("/authors/:id/books", get(author_books))
        .route("/books", get(list_books).post(create_book))
        .route(
            "/books/:id",
            get(get_book).put(update_book).delete(delete_book),
        )
        .with_state(library)
}

/// A path id that is not an integer can address no record.
fn parse_id(raw: &str, entity: &str) -> AppResult<i64> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::not_found(format!("{} not found", entity)))
}

fn json_body(body: Result<Json<Value>, JsonRejection>) -> AppResult<Value> {
    body.map(|Json(value)| value)
        .map_err(|rejection| ValidationError::MalformedJson(rejection.body_text()).into())
}

// ==================
// Authors
// ==================

async fn create_author(
    State(library): State<LibraryState>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Author>)> {
    let body = json_body(body)?;
    let author = library.create_author(&body)?;
    Ok((StatusCode::CREATED, Json(author)))
}

async fn list_authors(State(library): State<LibraryState>) -> AppResult<Json<Vec<Author>>> {
    Ok(Json(library.list_authors()?))
}

async fn get_author(
    State(library): State<LibraryState>,
    Path(id): Path<String>,
) -> AppResult<Json<Author>> {
    let id = parse_id(&id, "Author")?;
    Ok(Json(library.get_author(id)?))
}

async fn update_author(
    State(library): State<LibraryState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<Author>> {
    let body = json_body(body)?;
    let id = parse_id(&id, "Author")?;
    Ok(Json(library.update_author(id, &body)?))
}

async fn delete_author(
    State(library): State<LibraryState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeletedResponse<Author>>> {
    let id = parse_id(&id, "Author")?;
    let deleted = library.delete_author(id)?;
    Ok(Json(DeletedResponse { deleted }))
}

async fn author_books(
    State(library): State<LibraryState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<Book>>> {
    let id = parse_id(&id, "Author")?;
    Ok(Json(library.books_by_author(id)?))
}

// ==================
// Books
// ==================

async fn create_book(
    State(library): State<LibraryState>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let body = json_body(body)?;
    let book = library.create_book(&body)?;
    Ok((StatusCode::CREATED, Json(book)))
}

async fn list_books(
    State(library): State<LibraryState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> AppResult<Json<Vec<Book>>> {
    // Listing never fails on its parameters; an undecodable query lists everything.
    let pairs = query.map(|Query(pairs)| pairs).unwrap_or_default();
    let params = BookQuery::from_pairs(pairs);
    Ok(Json(library.list_books(&params)?))
}

async fn get_book(
    State(library): State<LibraryState>,
    Path(id): Path<String>,
) -> AppResult<Json<Book>> {
    let id = parse_id(&id, "Book")?;
    Ok(Json(library.get_book(id)?))
}

async fn update_book(
    State(library): State<LibraryState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<Book>> {
    let body = json_body(body)?;
    let id = parse_id(&id, "Book")?;
    Ok(Json(library.update_book(id, &body)?))
}

async fn delete_book(
    State(library): State<LibraryState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeletedResponse<Book>>> {
    let id = parse_id(&id, "Book")?;
    let deleted = library.delete_book(id)?;
    Ok(Json(DeletedResponse { deleted }))
}
