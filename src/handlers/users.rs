use crate::error::{ApiError, ErrorResponse};
use crate::handlers::relay;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value as JsonValue;

/// POST /register handler - Create a user account on the upstream API
///
/// Credentials pass through untouched; the gateway performs no validation
/// and keeps no account state of its own.
#[utoipa::path(
    post,
    path = routes::REGISTER,
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Upstream registration payload", body = serde_json::Value),
        (status = 500, description = "Upstream call failed", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn register_handler(
    State(state): State<AppState>,
    Json(body): Json<JsonValue>,
) -> Result<(StatusCode, Json<JsonValue>), ApiError> {
    relay(&state, &routes::USER_REGISTRATION, &[], Some(&body)).await
}

/// POST /login handler - Authenticate against the upstream API
#[utoipa::path(
    post,
    path = routes::LOGIN,
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Upstream login payload", body = serde_json::Value),
        (status = 500, description = "Upstream call failed", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn login_handler(
    State(state): State<AppState>,
    Json(body): Json<JsonValue>,
) -> Result<(StatusCode, Json<JsonValue>), ApiError> {
    relay(&state, &routes::USER_LOGIN, &[], Some(&body)).await
}
