//! # Bizdir Core - Domain Module

pub mod business;
pub mod filter;

pub use business::{Business, NewBusiness};
pub use filter::BusinessFilter;
