use axum::{extract::State, Json};

use crate::error::ApiError;
use crate::response::StatusMessage;
use crate::state::AppState;

/// Health check - GET /
pub async fn health_check() -> Json<StatusMessage> {
    Json(StatusMessage::ok("Backend is healthy"))
}

/// Fallback for unknown paths, so they share the error envelope.
pub async fn route_not_found() -> ApiError {
    ApiError::NotFound("Route not found".to_string())
}

/// Known path called with an unsupported method.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed("Method not allowed".to_string())
}

/// Readiness check - GET /health/ready
pub async fn readiness_check(State(state): State<AppState>) -> Result<Json<StatusMessage>, ApiError> {
    state
        .businesses
        .ping()
        .await
        .map_err(|e| ApiError::ServiceUnavailable(e.to_string()))?;

    Ok(Json(StatusMessage::ok("Backend is ready")))
}
