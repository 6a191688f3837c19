//! Configuration management
//!
//! Sources, lowest priority first: built-in defaults, `config/default.*`,
//! `config/{APP_ENV}.*`, `SECTION__KEY` environment variables, and finally the
//! flat `DATABASE_URL` / `EXTERNAL_API_KEY` / `API_KEY` variables.

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::constants::{DEFAULT_DATABASE_URL, DEFAULT_PLACES_BASE_URL, DEFAULT_PLACES_TIMEOUT_SECS};
use crate::error::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseSettings,
    pub auth: AuthSettings,
    pub places: PlacesSettings,
    pub log: LogSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseBackend {
    Postgres,
    Memory,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub backend: DatabaseBackend,
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_seconds: u64,
    pub run_migrations: bool,
}

impl DatabaseSettings {
    /// True when no database URL was configured and the local fallback is in use.
    pub fn uses_default_url(&self) -> bool {
        self.url == DEFAULT_DATABASE_URL
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthSettings {
    pub api_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlacesSettings {
    pub api_key: String,
    pub base_url: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    pub level: String,
    pub format: LogFormat,
}

/// Flat environment variables kept for compatibility with existing deployments.
#[derive(Debug, Default, Clone)]
pub struct LegacyEnv {
    pub database_url: Option<String>,
    pub external_api_key: Option<String>,
    pub api_key: Option<String>,
}

impl LegacyEnv {
    pub fn from_process() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").ok(),
            external_api_key: std::env::var("EXTERNAL_API_KEY").ok(),
            api_key: std::env::var("API_KEY").ok(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        Self::load_with(LegacyEnv::from_process())
    }

    pub fn load_with(legacy: LegacyEnv) -> Result<Self, AppError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Config::builder()
            .set_default("app.env", env.as_str())?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", 8000)?
            .set_default("app.name", "bizdir-server")?
            .set_default("app.cors_origins", vec!["http://localhost:5173"])?
            .set_default("database.backend", "postgres")?
            .set_default("database.url", DEFAULT_DATABASE_URL)?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 1)?
            .set_default("database.acquire_timeout_seconds", 3)?
            .set_default("database.run_migrations", true)?
            .set_default("auth.api_key", "")?
            .set_default("places.api_key", "")?
            .set_default("places.base_url", DEFAULT_PLACES_BASE_URL)?
            .set_default("places.timeout_seconds", DEFAULT_PLACES_TIMEOUT_SECS)?
            .set_default("log.level", "info")?
            .set_default("log.format", "json")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::default()
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("app.cors_origins")
                    .try_parsing(true),
            )
            .set_override_option("database.url", legacy.database_url)?
            .set_override_option("places.api_key", legacy.external_api_key)?
            .set_override_option("auth.api_key", legacy.api_key)?
            .build()?;

        let config: AppConfig = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.database.min_connections > self.database.max_connections {
            return Err(AppError::InvalidConfig(format!(
                "database.min_connections ({}) exceeds database.max_connections ({})",
                self.database.min_connections, self.database.max_connections
            )));
        }
        if self.places.timeout_seconds == 0 {
            return Err(AppError::InvalidConfig(
                "places.timeout_seconds must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
