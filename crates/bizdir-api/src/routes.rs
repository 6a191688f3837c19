use axum::{
    http::{header, HeaderName, HeaderValue, Method},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing::warn;

use crate::handlers::{business, health, ingest};
use crate::middleware::require_api_key;
use crate::state::AppState;

pub fn build_router(state: AppState, cors_origins: &[String]) -> Router {
    // Protected routes (API key)
    let protected_routes = Router::new()
        .route("/api/businesses", get(business::list_businesses))
        .route(
            "/api/businesses/{id}",
            get(business::get_business).delete(business::delete_business),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_api_key));

    // Public routes
    let public_routes = Router::new()
        .route("/", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/ingest-business", post(ingest::ingest_business));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .fallback(health::route_not_found)
        .method_not_allowed_fallback(health::method_not_allowed)
        .with_state(state)
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-api-key"),
        ])
}
