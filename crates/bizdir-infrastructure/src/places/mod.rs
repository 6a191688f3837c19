//! Place provider adapters

pub mod google_places_client;

pub use google_places_client::GooglePlacesClient;
