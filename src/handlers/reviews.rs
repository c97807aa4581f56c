use crate::error::{ApiError, ErrorResponse};
use crate::handlers::relay;
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};
use serde_json::Value as JsonValue;

/// GET /books/review/:isbn handler - Fetch the reviews for a book
#[utoipa::path(
    get,
    path = routes::REVIEWS_BY_ISBN,
    params(
        ("isbn" = String, Path, description = "ISBN of the reviewed book")
    ),
    responses(
        (status = 200, description = "Upstream review payload", body = serde_json::Value),
        (status = 500, description = "Upstream call failed", body = ErrorResponse)
    ),
    tag = "reviews"
)]
pub async fn review_by_isbn_handler(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> Result<(StatusCode, Json<JsonValue>), ApiError> {
    relay(&state, &routes::REVIEW_LOOKUP, &[("isbn", &isbn)], None).await
}

/// POST /books/review handler - Add or modify a book review
///
/// The request body is forwarded to the upstream API unchanged; whether it
/// creates or updates a review is the upstream's decision.
#[utoipa::path(
    post,
    path = routes::REVIEWS,
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Upstream review payload", body = serde_json::Value),
        (status = 500, description = "Upstream call failed", body = ErrorResponse)
    ),
    tag = "reviews"
)]
pub async fn add_review_handler(
    State(state): State<AppState>,
    Json(body): Json<JsonValue>,
) -> Result<(StatusCode, Json<JsonValue>), ApiError> {
    relay(&state, &routes::REVIEW_UPSERT, &[], Some(&body)).await
}

/// DELETE /books/review/:isbn handler - Delete a book review
#[utoipa::path(
    delete,
    path = routes::REVIEWS_BY_ISBN,
    params(
        ("isbn" = String, Path, description = "ISBN of the reviewed book")
    ),
    responses(
        (status = 200, description = "Upstream deletion payload", body = serde_json::Value),
        (status = 500, description = "Upstream call failed", body = ErrorResponse)
    ),
    tag = "reviews"
)]
pub async fn delete_review_handler(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> Result<(StatusCode, Json<JsonValue>), ApiError> {
    relay(&state, &routes::REVIEW_DELETE, &[("isbn", &isbn)], None).await
}
