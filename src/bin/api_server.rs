// src/bin/api_server.rs

use physics_mentor::domain::fixtures;
use physics_mentor::infra::{config::Config, logging};
use physics_mentor::transport;
use physics_mentor::{MemStorage, Storage};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    logging::init();

    // --- Content Store Initialization ---
    tracing::info!("Seeding in-memory content store");
    let storage = MemStorage::seeded()?;
    tracing::info!(
        courses = storage.course_count(),
        physics_fields = storage.physics_field_count(),
        "Content store ready"
    );
    let courses = storage.get_courses().await?;
    let physics_fields = storage.get_physics_fields().await?;
    for (field_id, reference) in fixtures::unresolved_course_refs(&courses, &physics_fields) {
        tracing::warn!(field_id, reference = %reference, "physics field references an unknown course");
    }

    let app_state = transport::http::AppState::new(Arc::new(storage));

    // --- API Server Initialization ---
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(config.bind_target()).await?;
    let addr = listener.local_addr()?;
    tracing::info!("API server listening on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received (Ctrl+C)");
}
