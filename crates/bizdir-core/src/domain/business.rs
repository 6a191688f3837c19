// ============================================================================
// Bizdir Core - Business Entity
// File: crates/bizdir-core/src/domain/business.rs
// Description: Business record and its unsaved form
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use bizdir_shared::constants::DEFAULT_STATE;

fn default_state() -> String {
    DEFAULT_STATE.to_string()
}

/// Persisted business record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Business {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub latitude: f64,
    pub longitude: f64,
    pub website: Option<String>,
    pub phone_number: Option<String>,
    pub owner_name: Option<String>,
    pub year_started: Option<i32>,
    pub star_rating: Option<f64>,
    pub review_count: Option<i32>,
    pub naics_code: Option<String>,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Business record before the store assigns its id and timestamps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewBusiness {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,

    pub city: String,

    #[serde(default = "default_state")]
    pub state: String,

    pub zip_code: String,

    #[validate(range(min = -90.0, max = 90.0, message = "Latitude out of range"))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0, message = "Longitude out of range"))]
    pub longitude: f64,

    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub owner_name: Option<String>,
    #[serde(default)]
    pub year_started: Option<i32>,

    #[serde(default)]
    #[validate(range(min = 0.0, max = 5.0, message = "Star rating must be between 0 and 5"))]
    pub star_rating: Option<f64>,

    #[serde(default)]
    #[validate(range(min = 0, message = "Review count cannot be negative"))]
    pub review_count: Option<i32>,

    #[serde(default)]
    pub naics_code: Option<String>,
}

impl NewBusiness {
    /// Create an unsaved business with the required fields; state defaults to TX.
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        city: impl Into<String>,
        zip_code: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            city: city.into(),
            state: default_state(),
            zip_code: zip_code.into(),
            latitude,
            longitude,
            website: None,
            phone_number: None,
            owner_name: None,
            year_started: None,
            star_rating: None,
            review_count: None,
            naics_code: None,
        }
    }
}

impl Business {
    /// Materialize a stored record from its unsaved form.
    pub fn from_new(new: NewBusiness, id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: new.name,
            address: new.address,
            city: new.city,
            state: new.state,
            zip_code: new.zip_code,
            latitude: new.latitude,
            longitude: new.longitude,
            website: new.website,
            phone_number: new.phone_number,
            owner_name: new.owner_name,
            year_started: new.year_started,
            star_rating: new.star_rating,
            review_count: new.review_count,
            naics_code: new.naics_code,
            created_at: now,
            updated_at: now,
        }
    }

    /// Refresh `updated_at`; never moves it before `created_at`.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now.max(self.created_at);
    }
}
