//! HTTP API Tests
//!
//! Drives the full router in-process with `tower::ServiceExt::oneshot`:
//! - status codes and bodies for every route
//! - the `{"error": ...}` body on every failure
//! - cascade delete and book listing end to end

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use bookshelf::http_server::HttpServer;
use serde_json::{json, Value};
use tower::ServiceExt;

// =============================================================================
// Helper Functions
// =============================================================================

fn app() -> Router {
    HttpServer::new().router()
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

async fn put(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::PUT, uri, Some(body)).await
}

async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::DELETE, uri, None).await
}

fn ids(value: &Value) -> Vec<i64> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["id"].as_i64().unwrap())
        .collect()
}

// =============================================================================
// Health and Fallback
// =============================================================================

#[tokio::test]
async fn test_health() {
    let app = app();
    let (status, body) = get(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["timestamp"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn test_unknown_route_has_error_body() {
    let app = app();
    let (status, body) = get(&app, "/publishers").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Not found"}));
}

// =============================================================================
// End-to-End Flow
// =============================================================================

#[tokio::test]
async fn test_end_to_end_flow() {
    let app = app();

    let (status, body) = post(&app, "/authors", json!({"name": "Ada"})).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"id": 1, "name": "Ada"}));

    let (status, body) = post(&app, "/authors", json!({"name": "ada"})).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].is_string());

    let (status, body) = post(&app, "/books", json!({"title": "X", "authorId": 1})).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"id": 1, "title": "X", "authorId": 1}));

    let (status, body) = delete(&app, "/authors/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"deleted": {"id": 1, "name": "Ada"}}));

    let (status, body) = get(&app, "/books/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Book not found"}));
}

// =============================================================================
// Authors
// =============================================================================

#[tokio::test]
async fn test_author_crud() {
    let app = app();

    post(&app, "/authors", json!({"name": " Ada ", "bio": "Analyst"})).await;
    post(&app, "/authors", json!({"name": "Grace"})).await;

    let (status, body) = get(&app, "/authors").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{"id": 1, "name": "Ada", "bio": "Analyst"}, {"id": 2, "name": "Grace"}])
    );

    let (status, body) = get(&app, "/authors/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Grace");

    let (status, body) = put(&app, "/authors/2", json!({"name": "Grace Hopper", "bio": "Admiral"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 2, "name": "Grace Hopper", "bio": "Admiral"}));
}

#[tokio::test]
async fn test_author_validation_errors() {
    let app = app();

    let (status, body) = post(&app, "/authors", json!({"name": "   "})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Name"));

    let (status, _) = post(&app, "/authors", json!({"bio": "no name"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get(&app, "/authors").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_malformed_json_is_bad_request_with_error_body() {
    let app = app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/authors")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].as_str().unwrap().starts_with("Malformed JSON body"));
}

#[tokio::test]
async fn test_author_not_found_routes() {
    let app = app();

    assert_eq!(get(&app, "/authors/7").await.0, StatusCode::NOT_FOUND);
    assert_eq!(get(&app, "/authors/abc").await.0, StatusCode::NOT_FOUND);
    assert_eq!(
        put(&app, "/authors/7", json!({"name": "Nobody"})).await.0,
        StatusCode::NOT_FOUND
    );
    assert_eq!(delete(&app, "/authors/7").await.0, StatusCode::NOT_FOUND);
    assert_eq!(get(&app, "/authors/7/books").await.0, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_author_update_name_conflict() {
    let app = app();
    post(&app, "/authors", json!({"name": "Ada"})).await;
    post(&app, "/authors", json!({"name": "Grace"})).await;

    let (status, _) = put(&app, "/authors/2", json!({"name": "ADA"})).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = put(&app, "/authors/1", json!({"name": "ADA"})).await;
    assert_eq!(status, StatusCode::OK);
}

// =============================================================================
// Books
// =============================================================================

#[tokio::test]
async fn test_book_requires_existing_author() {
    let app = app();

    let (status, body) = post(&app, "/books", json!({"title": "X", "authorId": 1})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Author 1 does not exist"}));

    let (_, books) = get(&app, "/books").await;
    assert_eq!(books, json!([]));
}

#[tokio::test]
async fn test_book_validation_order() {
    let app = app();
    post(&app, "/authors", json!({"name": "Ada"})).await;

    let (status, body) = post(&app, "/books", json!({"authorId": "x", "year": "y"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Title"));

    let (_, body) = post(&app, "/books", json!({"title": "T", "year": "y"})).await;
    assert!(body["error"].as_str().unwrap().starts_with("authorId"));

    let (_, body) = post(&app, "/books", json!({"title": "T", "authorId": 1, "year": "y"})).await;
    assert_eq!(body, json!({"error": "Year must be a whole number"}));

    let (status, body) =
        post(&app, "/books", json!({"title": "T", "authorId": 1, "year": 2000.5})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Year must be a whole number"}));
}

#[tokio::test]
async fn test_book_crud_and_duplicates() {
    let app = app();
    post(&app, "/authors", json!({"name": "Ada"})).await;
    post(&app, "/authors", json!({"name": "Grace"})).await;

    let (status, _) = post(&app, "/books", json!({"title": "Notes", "year": 1843, "authorId": 1})).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = post(&app, "/books", json!({"title": " notes ", "authorId": 1})).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = post(&app, "/books", json!({"title": "Notes", "authorId": 2})).await;
    assert_eq!(status, StatusCode::CREATED);

    // Same pair as its own current values: no conflict
    let (status, body) = put(&app, "/books/1", json!({"title": "NOTES", "year": 1843, "authorId": 1})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1, "title": "NOTES", "year": 1843, "authorId": 1}));

    // Re-pointing onto Grace's identical title conflicts
    let (status, _) = put(&app, "/books/1", json!({"title": "Notes", "authorId": 2})).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = put(&app, "/books/9", json!({"title": "Notes", "authorId": 1})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = delete(&app, "/books/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted"]["authorId"], 2);

    assert_eq!(delete(&app, "/books/2").await.0, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_author_books_and_cascade() {
    let app = app();
    post(&app, "/authors", json!({"name": "Ada"})).await;
    post(&app, "/authors", json!({"name": "Grace"})).await;
    post(&app, "/books", json!({"title": "A1", "authorId": 1})).await;
    post(&app, "/books", json!({"title": "G1", "authorId": 2})).await;
    post(&app, "/books", json!({"title": "A2", "authorId": 1})).await;

    let (status, body) = get(&app, "/authors/1/books").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![1, 3]);

    assert_eq!(delete(&app, "/authors/1").await.0, StatusCode::OK);

    let (_, body) = get(&app, "/books").await;
    assert_eq!(ids(&body), vec![2]);
    assert_eq!(get(&app, "/authors/1/books").await.0, StatusCode::NOT_FOUND);
}

// =============================================================================
// Book Listing
// =============================================================================

async fn seeded_shelf() -> Router {
    let app = app();
    post(&app, "/authors", json!({"name": "Ada Lovelace"})).await;
    post(&app, "/authors", json!({"name": "Grace Hopper"})).await;
    for (title, year, author) in [
        ("Sketch of the Analytical Engine", Some(1843), 1),
        ("Compiler Notes", Some(1952), 2),
        ("Letters", None, 1),
        ("Nanoseconds", Some(1985), 2),
        ("Notes on the Engine", Some(1843), 1),
    ] {
        let mut body = json!({"title": title, "authorId": author});
        if let Some(year) = year {
            body["year"] = json!(year);
        }
        post(&app, "/books", body).await;
    }
    app
}

#[tokio::test]
async fn test_list_books_filters() {
    let app = seeded_shelf().await;

    let (_, body) = get(&app, "/books?title=engine").await;
    assert_eq!(ids(&body), vec![1, 5]);

    let (_, body) = get(&app, "/books?author=HOPPER").await;
    assert_eq!(ids(&body), vec![2, 4]);

    let (_, body) = get(&app, "/books?year=1843").await;
    assert_eq!(ids(&body), vec![1, 5]);

    let (_, body) = get(&app, "/books?title=notes&year=1843").await;
    assert_eq!(ids(&body), vec![5]);
}

#[tokio::test]
async fn test_list_books_repeated_key_uses_first_value() {
    let app = seeded_shelf().await;

    let (status, body) = get(&app, "/books?title=engine&title=zzz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![1, 5]);

    let (status, body) = get(&app, "/books?limit=1&limit=4&colour=blue").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![1]);
}

#[tokio::test]
async fn test_list_books_sort_and_paginate() {
    let app = seeded_shelf().await;

    let (_, body) = get(&app, "/books?sort=year_desc").await;
    assert_eq!(ids(&body), vec![4, 2, 1, 5, 3]);

    let (_, body) = get(&app, "/books?sort=bogus_desc").await;
    assert_eq!(ids(&body), vec![1, 2, 3, 4, 5]);

    let (_, body) = get(&app, "/books?limit=2&page=2").await;
    assert_eq!(ids(&body), vec![3, 4]);

    let (status, body) = get(&app, "/books?limit=2&page=10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (_, body) = get(&app, "/books?page=2").await;
    assert_eq!(ids(&body).len(), 5);
}

#[tokio::test]
async fn test_listing_has_no_side_effects() {
    let app = seeded_shelf().await;

    let (_, first) = get(&app, "/books?sort=title_asc&limit=3").await;
    let (_, second) = get(&app, "/books?sort=title_asc&limit=3").await;
    assert_eq!(first, second);

    let (_, all) = get(&app, "/books").await;
    assert_eq!(ids(&all), vec![1, 2, 3, 4, 5]);
}
