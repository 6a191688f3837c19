//! Repository traits (ports)

pub mod business_repository;

pub use business_repository::BusinessRepository;

#[cfg(test)]
pub use business_repository::MockBusinessRepository;
