use crate::error::{ApiError, ErrorResponse};
use crate::handlers::relay;
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};
use serde_json::Value as JsonValue;

/// GET /books handler - Fetch the full catalog from the upstream API
///
/// Also serves GET /async/books, a compatibility alias with the identical
/// contract.
#[utoipa::path(
    get,
    path = routes::BOOKS,
    responses(
        (status = 200, description = "Upstream catalog payload", body = serde_json::Value),
        (status = 500, description = "Upstream call failed", body = ErrorResponse)
    ),
    tag = "books"
)]
pub async fn list_books_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<JsonValue>), ApiError> {
    relay(&state, &routes::LIST_BOOKS, &[], None).await
}

/// GET /books/isbn/:isbn handler - Look up a single book by ISBN
///
/// The ISBN is an opaque string; no checksum or format validation happens
/// here or upstream of here. Also serves GET /promise/isbn/:isbn.
#[utoipa::path(
    get,
    path = routes::BOOK_BY_ISBN,
    params(
        ("isbn" = String, Path, description = "ISBN of the book to look up")
    ),
    responses(
        (status = 200, description = "Upstream book payload", body = serde_json::Value),
        (status = 500, description = "Upstream call failed", body = ErrorResponse)
    ),
    tag = "books"
)]
pub async fn book_by_isbn_handler(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> Result<(StatusCode, Json<JsonValue>), ApiError> {
    relay(&state, &routes::BOOK_LOOKUP, &[("isbn", &isbn)], None).await
}

/// GET /books/author/:author handler - Look up books by author
///
/// Also serves GET /promise/author/:author.
#[utoipa::path(
    get,
    path = routes::BOOKS_BY_AUTHOR,
    params(
        ("author" = String, Path, description = "Author name to look up")
    ),
    responses(
        (status = 200, description = "Upstream books payload", body = serde_json::Value),
        (status = 500, description = "Upstream call failed", body = ErrorResponse)
    ),
    tag = "books"
)]
pub async fn books_by_author_handler(
    State(state): State<AppState>,
    Path(author): Path<String>,
) -> Result<(StatusCode, Json<JsonValue>), ApiError> {
    relay(&state, &routes::AUTHOR_LOOKUP, &[("author", &author)], None).await
}

/// GET /books/title/:title handler - Look up books by title
///
/// Also serves GET /promise/title/:title.
#[utoipa::path(
    get,
    path = routes::BOOKS_BY_TITLE,
    params(
        ("title" = String, Path, description = "Title to look up")
    ),
    responses(
        (status = 200, description = "Upstream books payload", body = serde_json::Value),
        (status = 500, description = "Upstream call failed", body = ErrorResponse)
    ),
    tag = "books"
)]
pub async fn books_by_title_handler(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<(StatusCode, Json<JsonValue>), ApiError> {
    relay(&state, &routes::TITLE_LOOKUP, &[("title", &title)], None).await
}
