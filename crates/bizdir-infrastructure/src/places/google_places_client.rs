// ============================================================================
// Bizdir Infrastructure - Google Places Client
// File: crates/bizdir-infrastructure/src/places/google_places_client.rs
// ============================================================================
//! "Find Place from Text" lookup returning the first candidate

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error, warn};

use bizdir_core::error::DomainError;
use bizdir_core::places::{PlaceCandidate, PlaceLookup};
use bizdir_shared::config::PlacesSettings;
use bizdir_shared::constants::PLACES_FIELDS;

#[derive(Clone)]
pub struct GooglePlacesClient {
    client: Client,
    base_url: Url,
    api_key: String,
}

// Response Structures
#[derive(Deserialize)]
struct FindPlaceResponse {
    #[serde(default)]
    candidates: Vec<PlaceCandidate>,
    #[serde(default)]
    status: Option<String>,
}

impl GooglePlacesClient {
    pub fn new(settings: &PlacesSettings) -> Result<Self, DomainError> {
        let base_url = Url::parse(&settings.base_url).map_err(|e| {
            DomainError::InternalError(format!("Invalid places base URL {}: {}", settings.base_url, e))
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()
            .map_err(|e| DomainError::InternalError(format!("Failed to build HTTP client: {}", e)))?;

        if settings.api_key.is_empty() {
            warn!("Places API key is empty; lookups will be rejected by the provider");
        }

        Ok(Self {
            client,
            base_url,
            api_key: settings.api_key.clone(),
        })
    }

    fn request_url(&self, business_name: &str, city: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("input", &format!("{}, {}", business_name, city))
            .append_pair("inputtype", "textquery")
            .append_pair("fields", PLACES_FIELDS)
            .append_pair("key", &self.api_key);
        url
    }
}

#[async_trait]
impl PlaceLookup for GooglePlacesClient {
    async fn fetch(&self, business_name: &str, city: &str) -> Result<Option<PlaceCandidate>, DomainError> {
        debug!("Place lookup: {}, {}", business_name, city);

        let response = self
            .client
            .get(self.request_url(business_name, city))
            .send()
            .await
            .map_err(|e| {
                // The request URL carries the provider key.
                let e = e.without_url();
                error!("Places network error: {}", e);
                DomainError::UpstreamError(format!("Places network error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            error!("Places API error ({}): {}", status, text);
            return Err(DomainError::UpstreamError(format!("Places API error ({}): {}", status, text)));
        }

        let body: FindPlaceResponse = response.json().await.map_err(|e| {
            DomainError::UpstreamError(format!("Failed to parse places response: {}", e.without_url()))
        })?;

        match body.status.as_deref() {
            None | Some("OK") | Some("ZERO_RESULTS") => {}
            Some(other) => warn!("Places API returned status {}", other),
        }

        Ok(body.candidates.into_iter().next())
    }
}
