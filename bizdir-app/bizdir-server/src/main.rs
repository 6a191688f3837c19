use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

use bizdir_api::{build_router, AppState};
use bizdir_core::repositories::BusinessRepository;
use bizdir_infrastructure::{create_pool, run_migrations, GooglePlacesClient, MemoryBusinessRepository, PgBusinessRepository};
use bizdir_shared::config::{AppConfig, DatabaseBackend};
use bizdir_shared::utils::redact_url_password;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize telemetry
    let _log_guard = bizdir_shared::telemetry::init_telemetry(&config.log);

    info!("{} starting ({})...", config.app.name, config.app.env);

    // Record store
    let business_repo: Arc<dyn BusinessRepository> = match config.database.backend {
        DatabaseBackend::Postgres => {
            if config.database.uses_default_url() {
                warn!("DATABASE_URL is not set; falling back to the built-in local connection string");
            }
            info!("Connecting to database at {}...", redact_url_password(&config.database.url));
            let pool = create_pool(&config.database).await?;
            info!("Database connection established.");

            if config.database.run_migrations {
                run_migrations(&pool).await?;
                info!("Database migrations applied.");
            }
            Arc::new(PgBusinessRepository::new(pool))
        }
        DatabaseBackend::Memory => {
            warn!("Using in-memory business store; records are lost on shutdown");
            Arc::new(MemoryBusinessRepository::new())
        }
    };

    // Place provider
    let places = Arc::new(GooglePlacesClient::new(&config.places)?);

    if config.auth.api_key.is_empty() {
        warn!("API_KEY is not set; every protected request will be rejected");
    }

    // Create App State
    let state = AppState::new(business_repo, places, config.auth.api_key.as_str());

    // Build router
    let app = build_router(state, &config.app.cors_origins);

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
