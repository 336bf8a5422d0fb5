use crate::storage::StorageError;
use crate::transport::http::types::ApiResponse;
use axum::http::StatusCode;
use axum::Json;

pub type HandlerError = (StatusCode, Json<ApiResponse>);

pub fn error_response(status: StatusCode, message: String) -> HandlerError {
    (
        status,
        Json(ApiResponse {
            success: false,
            data: None,
            error: Some(message),
        }),
    )
}

/// Maps a storage fault to a generic 500. The detail is logged, not returned.
pub fn storage_failure(context: &str, err: StorageError) -> HandlerError {
    tracing::error!(error = %err, "{}", context);
    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("{}: internal server error", context),
    )
}
