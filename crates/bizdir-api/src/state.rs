use std::sync::Arc;

use bizdir_core::places::PlaceLookup;
use bizdir_core::repositories::BusinessRepository;
use bizdir_core::services::{BusinessService, IngestionService};

/// Application state shared across handlers; built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub businesses: Arc<BusinessService>,
    pub ingestion: Arc<IngestionService>,
    pub api_key: Arc<str>,
}

impl AppState {
    pub fn new(
        business_repo: Arc<dyn BusinessRepository>,
        places: Arc<dyn PlaceLookup>,
        api_key: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            businesses: Arc::new(BusinessService::new(business_repo.clone())),
            ingestion: Arc::new(IngestionService::new(places, business_repo)),
            api_key: api_key.into(),
        }
    }
}
