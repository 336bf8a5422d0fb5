use crate::transport::http::types::{ApiResponse, AppState, HealthStatus};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy (store readable)", body = ApiResponse),
        (status = 503, description = "Service is unhealthy (store unreadable)", body = ApiResponse)
    )
)]
pub async fn healthcheck_handler(State(state): State<AppState>) -> impl IntoResponse {
    let counts = async {
        let courses = state.storage.get_courses().await?.len();
        let physics_fields = state.storage.get_physics_fields().await?.len();
        Ok::<_, crate::storage::StorageError>((courses, physics_fields))
    }
    .await;

    match counts {
        Ok((courses, physics_fields)) => {
            let status = HealthStatus {
                status: "ok".to_string(),
                started_at: state.started_at,
                courses,
                physics_fields,
            };
            (
                StatusCode::OK,
                Json(ApiResponse {
                    success: true,
                    data: serde_json::to_value(status).ok(),
                    error: None,
                }),
            )
                .into_response()
        }
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiResponse {
                success: false,
                data: Some(serde_json::json!({ "status": "unhealthy" })),
                error: Some(format!("Store read failed: {}", e)),
            }),
        )
            .into_response(),
    }
}
