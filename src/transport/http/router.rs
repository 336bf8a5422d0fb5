use crate::domain::model::{Course, Mode, PhysicsField};
use crate::transport::http::handlers::{content, health};
use crate::transport::http::types::{ApiResponse, AppState, HealthStatus};
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        content::list_courses_handler,
        content::list_physics_fields_handler
    ),
    components(schemas(ApiResponse, HealthStatus, Course, Mode, PhysicsField))
)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route("/api/courses", get(content::list_courses_handler))
        .route("/api/physics-fields", get(content::list_physics_fields_handler))
        .with_state(app_state)
}
