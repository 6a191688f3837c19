//! Business repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::{Business, NewBusiness};
use crate::error::DomainError;

/// Persistence boundary for business records.
///
/// Every call is one logical transaction against the backing store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BusinessRepository: Send + Sync {
    /// Absent when no record has this id.
    async fn get_by_id(&self, id: &Uuid) -> Result<Option<Business>, DomainError>;

    /// All records in insertion order.
    async fn list_all(&self) -> Result<Vec<Business>, DomainError>;

    /// Persist a new record, assigning its id and timestamps.
    async fn add(&self, business: NewBusiness) -> Result<Business, DomainError>;

    /// Remove a record. Unknown ids are a no-op.
    async fn delete(&self, id: &Uuid) -> Result<(), DomainError>;

    /// Cheap round-trip to the store, used by readiness checks.
    async fn ping(&self) -> Result<(), DomainError>;
}
