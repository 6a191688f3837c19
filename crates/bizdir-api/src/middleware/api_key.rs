use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};

use bizdir_shared::constants::API_KEY_HEADER;

use crate::error::ApiError;
use crate::state::AppState;

/// Reject requests whose `X-API-Key` header does not match the configured secret.
///
/// Missing and wrong keys produce the same response. An empty configured secret
/// rejects everything.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let authorized = match request.headers().get(API_KEY_HEADER) {
        Some(value) => !state.api_key.is_empty() && value.as_bytes() == state.api_key.as_bytes(),
        None => false,
    };

    if !authorized {
        warn!("Rejected request to {} without a valid API key", request.uri().path());
        return Err(ApiError::Unauthorized("Invalid or missing API key".to_string()));
    }

    debug!("API key accepted");
    Ok(next.run(request).await)
}
