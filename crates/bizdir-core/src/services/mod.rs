//! Domain services (business logic)

pub mod business_service;
pub mod ingestion_service;

pub use business_service::BusinessService;
pub use ingestion_service::IngestionService;
