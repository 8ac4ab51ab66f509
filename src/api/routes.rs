//! Application route configuration.

use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{course_routes, report_routes, student_routes, teacher_routes};
use super::openapi::ApiDoc;
use super::AppState;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/", get(root))
        .route("/health", get(health))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Versioned application routes
        .nest("/api/v1/courses", course_routes())
        .nest("/api/v1/students", student_routes())
        .nest("/api/v1/teachers", teacher_routes())
        .nest("/api/v1/reports", report_routes())
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Classroom API"
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    services: ServiceHealth,
}

/// Individual service health status
#[derive(Serialize)]
struct ServiceHealth {
    database: ServiceStatus,
}

/// Service status
#[derive(Serialize)]
struct ServiceStatus {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Health check endpoint with database connectivity check
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let db_status = match state.database.ping().await {
        Ok(_) => ServiceStatus {
            status: "healthy",
            error: None,
        },
        Err(e) => ServiceStatus {
            status: "unhealthy",
            error: Some(e.to_string()),
        },
    };

    let all_healthy = db_status.status == "healthy";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" },
        services: ServiceHealth {
            database: db_status,
        },
    };

    let status_code = if all_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response))
}
