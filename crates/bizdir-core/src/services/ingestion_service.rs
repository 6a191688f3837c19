// ============================================================================
// Bizdir Core - Ingestion Service
// File: crates/bizdir-core/src/services/ingestion_service.rs
// ============================================================================
//! Look up a business with the place provider and store the first match

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::Business;
use crate::error::DomainError;
use crate::places::{map_candidate, PlaceLookup};
use crate::repositories::BusinessRepository;

pub struct IngestionService {
    places: Arc<dyn PlaceLookup>,
    business_repo: Arc<dyn BusinessRepository>,
}

impl IngestionService {
    pub fn new(places: Arc<dyn PlaceLookup>, business_repo: Arc<dyn BusinessRepository>) -> Self {
        Self { places, business_repo }
    }

    /// Fetch, map and persist. Returns `None` when the provider has no candidate.
    ///
    /// Every call inserts a new row; repeated queries are not deduplicated.
    pub async fn ingest(&self, business_name: &str, city: &str) -> Result<Option<Business>, DomainError> {
        info!("Ingesting business: {}, {}", business_name, city);

        // 1. Ask the provider
        let candidate = match self.places.fetch(business_name, city).await? {
            Some(candidate) if !candidate.is_empty() => candidate,
            _ => {
                warn!("No place candidate for: {}, {}", business_name, city);
                return Ok(None);
            }
        };

        // 2. Map to an unsaved record
        let new_business = map_candidate(&candidate);

        // 3. Persist
        let business = self.business_repo.add(new_business).await?;

        info!("Business ingested: {} ({})", business.name, business.id);
        Ok(Some(business))
    }
}
