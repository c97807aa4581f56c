use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Custom error type for gateway endpoints
///
/// Every proxied route fails in exactly one way: the single outbound call to
/// the upstream API did not complete. The cause is collapsed into the route's
/// fixed error message, so callers see the same shape regardless of whether
/// the upstream was unreachable, timed out, or returned garbage.
#[derive(Debug)]
pub enum ApiError {
    /// The outbound call to the upstream API failed
    UpstreamCallFailed(&'static str),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::UpstreamCallFailed(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}
