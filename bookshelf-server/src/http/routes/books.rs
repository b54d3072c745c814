//! Book endpoints
//!
//! One handler per route, each a thin adapter over a single `BookStore`
//! call. Method mismatches never reach these handlers: the router answers
//! them with 405 first.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, ValidId};
use crate::http::server::AppState;
use crate::models::{Book, NewBook};

/// GET /book/{id} - get a single book
async fn get_book(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<Book>, ApiError> {
    let book = state.store.get_by_id(id).await?;
    Ok(Json(book))
}

/// GET /books - list every book
async fn list_books(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Book>>, ApiError> {
    let books = state.store.get_all().await?;
    Ok(Json(books))
}

/// POST /create - insert a book; any client-supplied id is ignored
async fn create_book(
    State(state): State<Arc<AppState>>,
    JsonBody(book): JsonBody<NewBook>,
) -> Result<(StatusCode, &'static str), ApiError> {
    let id = state.store.insert(&book).await?;
    tracing::info!(id, "book created");

    Ok((StatusCode::CREATED, "Book created"))
}

/// PUT /update - replace title and description of an existing book
async fn update_book(
    State(state): State<Arc<AppState>>,
    JsonBody(book): JsonBody<Book>,
) -> Result<&'static str, ApiError> {
    let touched = state.store.update(&book).await?;
    if touched == 0 {
        // Not an error: updating a missing id is a no-op
        tracing::warn!(id = book.id, "update matched no book");
    } else {
        tracing::info!(id = book.id, "book updated");
    }

    Ok("Book updated")
}

/// DELETE /delete/{id} - remove a book
async fn delete_book(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<String, ApiError> {
    let touched = state.store.delete(id).await?;
    if touched == 0 {
        tracing::warn!(id, "delete matched no book");
    } else {
        tracing::info!(id, "book deleted");
    }

    Ok(format!("Book with ID {} deleted", id))
}

/// Book routes
///
/// The id routes capture everything after the prefix, so `/book/`,
/// `/book/5/x` and similar reach the handler and fail id parsing with 400
/// rather than falling through to 404. A catch-all never matches an empty
/// segment, hence the extra bare-prefix routes.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/book/", get(get_book))
        .route("/book/{*id}", get(get_book))
        .route("/books", get(list_books))
        .route("/create", post(create_book))
        .route("/update", put(update_book))
        .route("/delete/", delete(delete_book))
        .route("/delete/{*id}", delete(delete_book))
}
