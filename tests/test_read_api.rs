//! End-to-end checks for the read API: start the router on an ephemeral port and query it.

use async_trait::async_trait;
use physics_mentor::transport;
use physics_mentor::{Course, MemStorage, NewUser, PhysicsField, Storage, StorageError, User};
use serde_json::Value;
use std::sync::Arc;
use utoipa::OpenApi;

async fn spawn_server(storage: Arc<dyn Storage>) -> Result<String, Box<dyn std::error::Error>> {
    let app_state = transport::http::AppState::new(storage);
    let router = transport::http::create_router(app_state);

    // Bind to an ephemeral port to avoid conflicts with a running server.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let port = listener.local_addr()?.port();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    Ok(format!("http://127.0.0.1:{}", port))
}

async fn seeded_server() -> Result<String, Box<dyn std::error::Error>> {
    spawn_server(Arc::new(MemStorage::seeded()?)).await
}

/// Backend whose reads always fail.
struct BrokenStorage;

#[async_trait]
impl Storage for BrokenStorage {
    async fn get_user(&self, _id: &str) -> Result<Option<User>, StorageError> {
        Ok(None)
    }

    async fn get_user_by_username(&self, _username: &str) -> Result<Option<User>, StorageError> {
        Ok(None)
    }

    async fn create_user(&self, _new_user: NewUser) -> Result<User, StorageError> {
        Err(StorageError::Backend("read-only".into()))
    }

    async fn get_courses(&self) -> Result<Vec<Course>, StorageError> {
        Err(StorageError::Backend("connection reset".into()))
    }

    async fn get_physics_fields(&self) -> Result<Vec<PhysicsField>, StorageError> {
        Err(StorageError::Backend("connection reset".into()))
    }
}

#[tokio::test]
async fn courses_endpoint_returns_seeded_courses() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = seeded_server().await?;

    let resp = reqwest::get(format!("{}/api/courses", base_url)).await?;
    assert_eq!(resp.status(), reqwest::StatusCode::OK);

    let body: Value = resp.json().await?;
    let courses = body.as_array().expect("courses should be a JSON array");
    assert_eq!(courses.len(), 3);

    let ids: Vec<i64> = courses.iter().map(|c| c["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    let first = &courses[0];
    assert_eq!(first["examName"], "JEE Advanced");
    assert_eq!(first["country"], "India");
    assert_eq!(first["mode"], "Offline");
    assert!(first["bannerImage"].as_str().unwrap().starts_with("https://"));
    assert!(first.get("exam_name").is_none());

    Ok(())
}

#[tokio::test]
async fn physics_fields_endpoint_returns_seeded_fields() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = seeded_server().await?;

    let resp = reqwest::get(format!("{}/api/physics-fields", base_url)).await?;
    assert_eq!(resp.status(), reqwest::StatusCode::OK);

    let body: Value = resp.json().await?;
    let fields = body.as_array().expect("physics fields should be a JSON array");
    assert_eq!(fields.len(), 2);

    let first = &fields[0];
    assert_eq!(first["id"], 1);
    assert_eq!(first["name"], "Mechanics");
    let links = first["youtubeLinks"].as_array().unwrap();
    assert!(!links.is_empty());
    assert!(links.iter().all(|l| l.is_string()));
    assert_eq!(first["relatedCourseIds"], serde_json::json!(["1", "3"]));

    assert_eq!(fields[1]["name"], "Electromagnetism");

    Ok(())
}

#[tokio::test]
async fn repeated_requests_return_identical_bodies() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = seeded_server().await?;
    let client = reqwest::Client::new();

    for path in ["/api/courses", "/api/physics-fields"] {
        let url = format!("{}{}", base_url, path);
        let first: Value = client.get(&url).send().await?.json().await?;
        let second: Value = client.get(&url).send().await?.json().await?;
        assert_eq!(first, second, "{} drifted between calls", path);
    }

    Ok(())
}

#[tokio::test]
async fn query_parameters_are_ignored() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = seeded_server().await?;

    let body: Value = reqwest::get(format!("{}/api/courses?country=UK&limit=1", base_url))
        .await?
        .json()
        .await?;
    assert_eq!(body.as_array().unwrap().len(), 3);

    Ok(())
}

#[tokio::test]
async fn storage_failure_maps_to_server_error() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_server(Arc::new(BrokenStorage)).await?;

    for path in ["/api/courses", "/api/physics-fields"] {
        let resp = reqwest::get(format!("{}{}", base_url, path)).await?;
        assert_eq!(resp.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = resp.json().await?;
        assert_eq!(body["success"], false);
        let error = body["error"].as_str().unwrap();
        assert!(error.contains("internal server error"));
        assert!(!error.contains("connection reset"));
    }

    Ok(())
}

#[tokio::test]
async fn health_reports_store_sizes() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = seeded_server().await?;

    let resp = reqwest::get(format!("{}/health", base_url)).await?;
    assert_eq!(resp.status(), reqwest::StatusCode::OK);

    let body: Value = resp.json().await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "ok");
    assert_eq!(body["data"]["courses"], 3);
    assert_eq!(body["data"]["physicsFields"], 2);
    assert!(body["data"]["startedAt"].is_string());

    Ok(())
}

#[tokio::test]
async fn health_is_unavailable_when_store_fails() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_server(Arc::new(BrokenStorage)).await?;

    let resp = reqwest::get(format!("{}/health", base_url)).await?;
    assert_eq!(resp.status(), reqwest::StatusCode::SERVICE_UNAVAILABLE);

    let body: Value = resp.json().await?;
    assert_eq!(body["data"]["status"], "unhealthy");

    Ok(())
}

#[tokio::test]
async fn unknown_route_is_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = seeded_server().await?;

    let resp = reqwest::get(format!("{}/api/users", base_url)).await?;
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);

    Ok(())
}

#[test]
fn openapi_document_lists_read_routes() {
    let doc = serde_json::to_value(transport::http::ApiDoc::openapi()).unwrap();
    let paths = doc["paths"].as_object().unwrap();

    assert!(paths.contains_key("/api/courses"));
    assert!(paths.contains_key("/api/physics-fields"));
    assert!(paths.contains_key("/health"));

    let schemas = doc["components"]["schemas"].as_object().unwrap();
    assert!(schemas.contains_key("Course"));
    assert!(schemas.contains_key("PhysicsField"));
}
