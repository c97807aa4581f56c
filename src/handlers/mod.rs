pub mod books;
pub mod health;
pub mod reviews;
pub mod users;

pub use books::{
    book_by_isbn_handler, books_by_author_handler, books_by_title_handler, list_books_handler,
};
pub use health::health_handler;
pub use reviews::{add_review_handler, delete_review_handler, review_by_isbn_handler};
pub use users::{login_handler, register_handler};

use axum::{http::StatusCode, Json};
use serde_json::Value as JsonValue;

use crate::error::ApiError;
use crate::routes::RouteDescriptor;
use crate::state::AppState;

/// Single forwarding path shared by every proxied route.
///
/// Issues one upstream call via the descriptor and mirrors the decoded
/// payload back as HTTP 200. On failure the cause is logged and the caller
/// gets the route's fixed error message as a 500.
pub(crate) async fn relay(
    state: &AppState,
    route: &RouteDescriptor,
    params: &[(&str, &str)],
    body: Option<&JsonValue>,
) -> Result<(StatusCode, Json<JsonValue>), ApiError> {
    match state.upstream.forward(route, params, body).await {
        Ok(payload) => Ok((StatusCode::OK, Json(payload))),
        Err(err) => {
            tracing::warn!(
                "Upstream call for {} {} failed: {:#}",
                route.method,
                route.local_path,
                err
            );
            Err(ApiError::UpstreamCallFailed(route.error_message))
        }
    }
}
