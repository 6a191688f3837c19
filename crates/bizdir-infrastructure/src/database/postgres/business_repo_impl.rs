// ============================================================================
// Bizdir Infrastructure - PostgreSQL Business Repository
// File: crates/bizdir-infrastructure/src/database/postgres/business_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::{error, info, warn};
use uuid::Uuid;

use bizdir_core::domain::{Business, NewBusiness};
use bizdir_core::error::DomainError;
use bizdir_core::repositories::BusinessRepository;
use bizdir_shared::new_id;

/// Column list shared by every statement; order matches `BusinessRow`.
macro_rules! business_columns {
    () => {
        "id, name, address, city, state, zip_code, latitude, longitude, \
         website, phone_number, owner_name, year_started, star_rating, \
         review_count, naics_code, created_at, updated_at"
    };
}

pub struct PgBusinessRepository {
    pool: PgPool,
}

impl PgBusinessRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct BusinessRow {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub latitude: f64,
    pub longitude: f64,
    pub website: Option<String>,
    pub phone_number: Option<String>,
    pub owner_name: Option<String>,
    pub year_started: Option<i32>,
    pub star_rating: Option<f64>,
    pub review_count: Option<i32>,
    pub naics_code: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<BusinessRow> for Business {
    fn from(row: BusinessRow) -> Self {
        Business {
            id: row.id,
            name: row.name,
            address: row.address,
            city: row.city,
            state: row.state,
            zip_code: row.zip_code,
            latitude: row.latitude,
            longitude: row.longitude,
            website: row.website,
            phone_number: row.phone_number,
            owner_name: row.owner_name,
            year_started: row.year_started,
            star_rating: row.star_rating,
            review_count: row.review_count,
            naics_code: row.naics_code,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn database_error(action: &str, e: sqlx::Error) -> DomainError {
    error!("Database error {}: {}", action, e);
    DomainError::DatabaseError(e.to_string())
}

#[async_trait]
impl BusinessRepository for PgBusinessRepository {
    async fn get_by_id(&self, id: &Uuid) -> Result<Option<Business>, DomainError> {
        let row: Option<BusinessRow> = sqlx::query_as(concat!(
            "SELECT ",
            business_columns!(),
            " FROM businesses WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| database_error("finding business by id", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn list_all(&self) -> Result<Vec<Business>, DomainError> {
        let rows: Vec<BusinessRow> = sqlx::query_as(concat!(
            "SELECT ",
            business_columns!(),
            " FROM businesses ORDER BY created_at, id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| database_error("listing businesses", e))?;

        Ok(rows.into_iter().map(Business::from).collect())
    }

    async fn add(&self, business: NewBusiness) -> Result<Business, DomainError> {
        info!("Creating business: {}", business.name);

        let id = new_id();
        let now = Utc::now();

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| database_error("starting transaction", e))?;

        let row: BusinessRow = sqlx::query_as(concat!(
            "INSERT INTO businesses (",
            business_columns!(),
            ") VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17) \
             RETURNING ",
            business_columns!()
        ))
        .bind(id)
        .bind(&business.name)
        .bind(&business.address)
        .bind(&business.city)
        .bind(&business.state)
        .bind(&business.zip_code)
        .bind(business.latitude)
        .bind(business.longitude)
        .bind(&business.website)
        .bind(&business.phone_number)
        .bind(&business.owner_name)
        .bind(business.year_started)
        .bind(business.star_rating)
        .bind(business.review_count)
        .bind(&business.naics_code)
        .bind(now)
        .bind(now)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| database_error("creating business", e))?;

        tx.commit()
            .await
            .map_err(|e| database_error("committing business", e))?;

        info!("Business created successfully: {}", row.id);
        Ok(row.into())
    }

    async fn delete(&self, id: &Uuid) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| database_error("starting transaction", e))?;

        let existing: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM businesses WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| database_error("finding business to delete", e))?;

        if existing.is_none() {
            return Ok(());
        }

        let result = sqlx::query("DELETE FROM businesses WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| database_error("deleting business", e))?;

        tx.commit()
            .await
            .map_err(|e| database_error("committing delete", e))?;

        if result.rows_affected() == 0 {
            warn!("Business {} disappeared before delete", id);
        } else {
            info!("Business deleted: {}", id);
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| database_error("pinging database", e))?;
        Ok(())
    }
}
