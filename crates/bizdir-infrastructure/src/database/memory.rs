//! In-memory business repository for local runs and tests

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use bizdir_core::domain::{Business, NewBusiness};
use bizdir_core::error::DomainError;
use bizdir_core::repositories::BusinessRepository;
use bizdir_shared::new_id;

#[derive(Default)]
pub struct MemoryBusinessRepository {
    businesses: RwLock<Vec<Business>>,
}

impl MemoryBusinessRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BusinessRepository for MemoryBusinessRepository {
    async fn get_by_id(&self, id: &Uuid) -> Result<Option<Business>, DomainError> {
        let businesses = self.businesses.read().await;
        Ok(businesses.iter().find(|b| b.id == *id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Business>, DomainError> {
        Ok(self.businesses.read().await.clone())
    }

    async fn add(&self, business: NewBusiness) -> Result<Business, DomainError> {
        let business = Business::from_new(business, new_id(), Utc::now());
        self.businesses.write().await.push(business.clone());
        info!("Business created in memory: {}", business.id);
        Ok(business)
    }

    async fn delete(&self, id: &Uuid) -> Result<(), DomainError> {
        self.businesses.write().await.retain(|b| b.id != *id);
        Ok(())
    }

    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }
}
