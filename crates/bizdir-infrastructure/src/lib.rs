//! # Bizdir Infrastructure
//! 
//! Database and place-provider implementations (adapters).

pub mod database;
pub mod places;

pub use database::{create_pool, run_migrations, MemoryBusinessRepository, PgBusinessRepository};
pub use places::GooglePlacesClient;
