use crate::domain::model::{Course, PhysicsField};
use crate::transport::http::handlers::common::{storage_failure, HandlerError};
use crate::transport::http::types::{ApiResponse, AppState};
use axum::extract::State;
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/courses",
    responses(
        (status = 200, description = "All courses, in store order", body = [Course]),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn list_courses_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Course>>, HandlerError> {
    let courses = state
        .storage
        .get_courses()
        .await
        .map_err(|e| storage_failure("Failed to load courses", e))?;
    tracing::debug!(count = courses.len(), "serving courses");
    Ok(Json(courses))
}

#[utoipa::path(
    get,
    path = "/api/physics-fields",
    responses(
        (status = 200, description = "All physics fields, in store order", body = [PhysicsField]),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn list_physics_fields_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<PhysicsField>>, HandlerError> {
    let fields = state
        .storage
        .get_physics_fields()
        .await
        .map_err(|e| storage_failure("Failed to load physics fields", e))?;
    tracing::debug!(count = fields.len(), "serving physics fields");
    Ok(Json(fields))
}
