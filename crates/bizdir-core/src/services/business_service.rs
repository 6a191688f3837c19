//! Read, create and delete operations over the business store

use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;
use validator::Validate;

use crate::domain::{Business, BusinessFilter, NewBusiness};
use crate::error::DomainError;
use crate::repositories::BusinessRepository;

pub struct BusinessService {
    business_repo: Arc<dyn BusinessRepository>,
}

impl BusinessService {
    pub fn new(business_repo: Arc<dyn BusinessRepository>) -> Self {
        Self { business_repo }
    }

    /// List records matching `filter`, in store order.
    pub async fn list(&self, filter: &BusinessFilter) -> Result<Vec<Business>, DomainError> {
        let businesses = self.business_repo.list_all().await?;
        if filter.is_empty() {
            return Ok(businesses);
        }

        let total = businesses.len();
        let matched: Vec<Business> = businesses.into_iter().filter(|b| filter.matches(b)).collect();
        debug!("Filter matched {} of {} businesses", matched.len(), total);
        Ok(matched)
    }

    pub async fn get(&self, id: &Uuid) -> Result<Business, DomainError> {
        self.business_repo
            .get_by_id(id)
            .await?
            .ok_or(DomainError::BusinessNotFound(*id))
    }

    /// Direct creation path; validates before persisting.
    pub async fn create(&self, new_business: NewBusiness) -> Result<Business, DomainError> {
        new_business.validate()?;
        let business = self.business_repo.add(new_business).await?;
        info!("Business created: {}", business.id);
        Ok(business)
    }

    pub async fn delete(&self, id: &Uuid) -> Result<(), DomainError> {
        self.business_repo.delete(id).await
    }

    pub async fn ping(&self) -> Result<(), DomainError> {
        self.business_repo.ping().await
    }
}
