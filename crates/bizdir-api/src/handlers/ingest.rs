//! Ingest a business from the place provider

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct IngestParams {
    pub business_name: String,
    pub city: String,
}

#[derive(Debug, Serialize)]
pub struct IngestResponse {
    pub id: Uuid,
    pub name: String,
    pub address: String,
}

/// Ingest handler - POST /ingest-business?business_name=..&city=..
pub async fn ingest_business(
    State(state): State<AppState>,
    params: Result<Query<IngestParams>, QueryRejection>,
) -> Result<Json<IngestResponse>, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::Validation(e.body_text()))?;

    let business = state
        .ingestion
        .ingest(&params.business_name, &params.city)
        .await?
        .ok_or_else(|| {
            ApiError::NotFound(format!(
                "No place found for {}, {}",
                params.business_name, params.city
            ))
        })?;

    Ok(Json(IngestResponse {
        id: business.id,
        name: business.name,
        address: business.address,
    }))
}
