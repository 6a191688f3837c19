//! PostgreSQL repository implementations

pub mod business_repo_impl;

pub use business_repo_impl::PgBusinessRepository;
