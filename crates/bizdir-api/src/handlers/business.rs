// ============================================================================
// Bizdir API - Business Handlers
// File: crates/bizdir-api/src/handlers/business.rs
// ============================================================================
//! List, fetch and delete business records (API key required)

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use bizdir_core::domain::{Business, BusinessFilter};

use crate::error::ApiError;
use crate::state::AppState;

/// List businesses - GET /api/businesses
pub async fn list_businesses(
    State(state): State<AppState>,
    filter: Result<Query<BusinessFilter>, QueryRejection>,
) -> Result<Json<Vec<Business>>, ApiError> {
    let Query(filter) = filter.map_err(|e| ApiError::Validation(e.body_text()))?;
    let businesses = state.businesses.list(&filter).await?;
    Ok(Json(businesses))
}

/// Fetch one business - GET /api/businesses/{id}
pub async fn get_business(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Business>, ApiError> {
    let Path(id) = id.map_err(|e| ApiError::Validation(e.body_text()))?;
    let business = state.businesses.get(&id).await?;
    Ok(Json(business))
}

/// Delete a business - DELETE /api/businesses/{id}
pub async fn delete_business(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id.map_err(|e| ApiError::Validation(e.body_text()))?;
    state.businesses.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
