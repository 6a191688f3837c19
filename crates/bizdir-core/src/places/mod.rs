//! External place lookup (port) and candidate mapping

pub mod candidate;

use async_trait::async_trait;

use crate::error::DomainError;

pub use candidate::{map_candidate, Geometry, LatLng, PlaceCandidate};

/// Free-text lookup against an external place provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlaceLookup: Send + Sync {
    /// First candidate for `"{business_name}, {city}"`, or `None` when the
    /// provider has no match. Non-success responses are errors.
    async fn fetch(&self, business_name: &str, city: &str) -> Result<Option<PlaceCandidate>, DomainError>;
}
