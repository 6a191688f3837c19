//! Place candidate returned by the provider and its mapping to a business

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::NewBusiness;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaceCandidate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub place_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(default)]
    pub location: Option<LatLng>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

impl PlaceCandidate {
    /// True when the provider returned a candidate with no name, address or geometry.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.formatted_address.is_none() && self.geometry.is_none()
    }

    fn location(&self) -> Option<&LatLng> {
        self.geometry.as_ref().and_then(|g| g.location.as_ref())
    }
}

/// Map a provider candidate to an unsaved business.
///
/// The formatted address is kept as one opaque string: city and zip code stay
/// empty and state keeps its default. Missing coordinates fall back to 0.0.
pub fn map_candidate(candidate: &PlaceCandidate) -> NewBusiness {
    let lat = candidate.location().and_then(|l| l.lat);
    let lng = candidate.location().and_then(|l| l.lng);

    if lat.is_none() || lng.is_none() {
        // 0.0 is a real coordinate; these rows are indistinguishable from
        // businesses located on the equator or the prime meridian.
        warn!(
            place_id = candidate.place_id.as_deref().unwrap_or(""),
            "Place candidate has no location, defaulting coordinates to 0.0"
        );
    }

    NewBusiness::new(
        candidate.name.clone().unwrap_or_default(),
        candidate.formatted_address.clone().unwrap_or_default(),
        "",
        "",
        lat.unwrap_or(0.0),
        lng.unwrap_or(0.0),
    )
}
