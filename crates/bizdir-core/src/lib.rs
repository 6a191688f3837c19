//! # Bizdir Core
//! 
//! Domain entities, services, and port traits for the business directory.

pub mod domain;
pub mod places;
pub mod services;
pub mod repositories;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
