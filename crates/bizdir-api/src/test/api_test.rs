use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use bizdir_core::domain::{Business, NewBusiness};
use bizdir_core::error::DomainError;
use bizdir_core::places::{Geometry, LatLng, PlaceCandidate, PlaceLookup};
use bizdir_core::repositories::BusinessRepository;
use bizdir_infrastructure::MemoryBusinessRepository;

use crate::{build_router, AppState};

const API_KEY: &str = "testkey";

enum StubPlaces {
    Found(PlaceCandidate),
    Empty,
    Failing,
}

#[async_trait]
impl PlaceLookup for StubPlaces {
    async fn fetch(&self, _business_name: &str, _city: &str) -> Result<Option<PlaceCandidate>, DomainError> {
        match self {
            StubPlaces::Found(candidate) => Ok(Some(candidate.clone())),
            StubPlaces::Empty => Ok(None),
            StubPlaces::Failing => Err(DomainError::UpstreamError(
                "Places API error (500 Internal Server Error): boom".to_string(),
            )),
        }
    }
}

struct FailingRepository;

#[async_trait]
impl BusinessRepository for FailingRepository {
    async fn get_by_id(&self, _id: &Uuid) -> Result<Option<Business>, DomainError> {
        Err(DomainError::DatabaseError("DB Failure".to_string()))
    }

    async fn list_all(&self) -> Result<Vec<Business>, DomainError> {
        Err(DomainError::DatabaseError("DB Failure".to_string()))
    }

    async fn add(&self, _business: NewBusiness) -> Result<Business, DomainError> {
        Err(DomainError::DatabaseError("DB Failure".to_string()))
    }

    async fn delete(&self, _id: &Uuid) -> Result<(), DomainError> {
        Err(DomainError::DatabaseError("DB Failure".to_string()))
    }

    async fn ping(&self) -> Result<(), DomainError> {
        Err(DomainError::DatabaseError("connection refused".to_string()))
    }
}

fn test_candidate() -> PlaceCandidate {
    PlaceCandidate {
        name: Some("Test Business".to_string()),
        formatted_address: Some("123 Main St, Austin, TX 78701".to_string()),
        geometry: Some(Geometry {
            location: Some(LatLng { lat: Some(30.2672), lng: Some(-97.7431) }),
        }),
        place_id: None,
    }
}

fn app_with(repo: Arc<dyn BusinessRepository>, places: StubPlaces) -> Router {
    build_router(AppState::new(repo, Arc::new(places), API_KEY), &[])
}

fn app() -> (Router, Arc<MemoryBusinessRepository>) {
    let repo = Arc::new(MemoryBusinessRepository::new());
    (app_with(repo.clone(), StubPlaces::Empty), repo)
}

fn request(method: Method, uri: &str, api_key: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(key) = api_key {
        builder = builder.header("X-API-Key", key);
    }
    builder.body(Body::empty()).unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn seed(repo: &MemoryBusinessRepository, name: &str, city: &str) -> Business {
    let mut new = NewBusiness::new(name, "123 Main St", city, "78701", 30.2672, -97.7431);
    new.star_rating = Some(4.5);
    new.naics_code = Some("541511".to_string());
    repo.add(new).await.unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let (app, _) = app();
    let (status, body) = send(app, request(Method::GET, "/", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["message"].as_str().unwrap().to_lowercase().contains("healthy"));
}

#[tokio::test]
async fn test_list_businesses_missing_api_key() {
    let (app, _) = app();
    let (status, body) = send(app, request(Method::GET, "/api/businesses", None)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["detail"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_list_businesses_invalid_api_key() {
    let (app, _) = app();
    let (status, body) = send(app, request(Method::GET, "/api/businesses", Some("wrongkey"))).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["detail"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_empty_configured_key_rejects_everything() {
    let repo = Arc::new(MemoryBusinessRepository::new());
    let app = build_router(AppState::new(repo, Arc::new(StubPlaces::Empty), ""), &[]);
    let (status, body) = send(app, request(Method::GET, "/api/businesses", Some(""))).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["detail"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_list_businesses_empty() {
    let (app, _) = app();
    let (status, body) = send(app, request(Method::GET, "/api/businesses", Some(API_KEY))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn test_list_businesses_success() {
    let (app, repo) = app();
    let stored = seed(&repo, "Test Business", "Austin").await;

    let (status, body) = send(app, request(Method::GET, "/api/businesses", Some(API_KEY))).await;

    assert_eq!(status, StatusCode::OK);
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["id"], stored.id.to_string());
    assert_eq!(list[0]["name"], "Test Business");
    assert_eq!(list[0]["zipCode"], "78701");
    assert_eq!(list[0]["starRating"], 4.5);
}

#[tokio::test]
async fn test_list_businesses_with_filters() {
    let (app, repo) = app();
    seed(&repo, "Taco Shack", "Austin").await;
    seed(&repo, "Burger Barn", "Dallas").await;

    let (status, body) = send(
        app,
        request(Method::GET, "/api/businesses?city=dallas&minStarRating=4", Some(API_KEY)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["name"], "Burger Barn");
}

#[tokio::test]
async fn test_list_businesses_db_error() {
    let app = app_with(Arc::new(FailingRepository), StubPlaces::Empty);
    let (status, body) = send(app, request(Method::GET, "/api/businesses", Some(API_KEY))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["detail"]["code"], "INTERNAL_SERVER_ERROR");
    assert!(body["detail"]["message"].as_str().unwrap().contains("DB Failure"));
}

#[tokio::test]
async fn test_get_and_delete_business() {
    let (app, repo) = app();
    let stored = seed(&repo, "Test Business", "Austin").await;
    let uri = format!("/api/businesses/{}", stored.id);

    let (status, body) = send(app.clone(), request(Method::GET, &uri, Some(API_KEY))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Test Business");

    let (status, _) = send(app.clone(), request(Method::DELETE, &uri, Some(API_KEY))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(app.clone(), request(Method::GET, &uri, Some(API_KEY))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"]["code"], "NOT_FOUND");

    // Deleting again is a no-op
    let (status, _) = send(app, request(Method::DELETE, &uri, Some(API_KEY))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_get_business_requires_api_key_and_valid_id() {
    let (app, _) = app();

    let uri = format!("/api/businesses/{}", Uuid::new_v4());
    let (status, _) = send(app.clone(), request(Method::GET, &uri, None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) =
        send(app, request(Method::GET, "/api/businesses/not-a-uuid", Some(API_KEY))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_ingest_business_success() {
    let repo = Arc::new(MemoryBusinessRepository::new());
    let app = app_with(repo.clone(), StubPlaces::Found(test_candidate()));

    let (status, body) = send(
        app,
        request(
            Method::POST,
            "/ingest-business?business_name=Test%20Business&city=Austin",
            None,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Test Business");
    assert_eq!(body["address"], "123 Main St, Austin, TX 78701");

    let stored = repo.list_all().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(body["id"], stored[0].id.to_string());
    assert_eq!(stored[0].city, "");
    assert_eq!(stored[0].state, "TX");
}

#[tokio::test]
async fn test_ingest_business_repeated_creates_new_rows() {
    let repo = Arc::new(MemoryBusinessRepository::new());
    let app = app_with(repo.clone(), StubPlaces::Found(test_candidate()));
    let uri = "/ingest-business?business_name=Test%20Business&city=Austin";

    send(app.clone(), request(Method::POST, uri, None)).await;
    send(app, request(Method::POST, uri, None)).await;

    assert_eq!(repo.list_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_ingest_business_not_found() {
    let (app, repo) = app();
    let (status, body) = send(
        app,
        request(Method::POST, "/ingest-business?business_name=Ghost&city=Austin", None),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"]["code"], "NOT_FOUND");
    assert!(repo.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_ingest_business_missing_params() {
    let (app, _) = app();
    let (status, body) =
        send(app, request(Method::POST, "/ingest-business?business_name=Ghost", None)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_ingest_business_upstream_failure() {
    let app = app_with(Arc::new(MemoryBusinessRepository::new()), StubPlaces::Failing);
    let (status, body) = send(
        app,
        request(Method::POST, "/ingest-business?business_name=Test&city=Austin", None),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["detail"]["code"], "UPSTREAM_ERROR");
}

#[tokio::test]
async fn test_readiness_check() {
    let (app, _) = app();
    let (status, body) = send(app, request(Method::GET, "/health/ready", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let failing = app_with(Arc::new(FailingRepository), StubPlaces::Empty);
    let (status, body) = send(failing, request(Method::GET, "/health/ready", None)).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["detail"]["code"], "SERVICE_UNAVAILABLE");
}

#[tokio::test]
async fn test_unknown_route_uses_error_envelope() {
    let (app, _) = app();
    let (status, body) = send(app, request(Method::GET, "/does-not-exist", None)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_wrong_method_uses_error_envelope() {
    let (app, _) = app();
    let (status, body) = send(
        app.clone(),
        request(Method::GET, "/ingest-business?business_name=a&city=b", None),
    )
    .await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["detail"]["code"], "METHOD_NOT_ALLOWED");

    let (status, body) = send(app, request(Method::DELETE, "/", None)).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["detail"]["code"], "METHOD_NOT_ALLOWED");
}
