//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{ComponentCheck, ComponentStatus, HealthResponse, ServiceStatus};
use crate::infrastructure::persistence::ping;
use crate::state::AppState;

/// Reports whether the store behind the API answers queries.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: database reachable
/// - **503 Service Unavailable**: database check failed
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok", "message": "Connected" }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let response = HealthResponse::from_database(check_database(&state).await);

    let code = match response.status {
        ServiceStatus::Healthy => StatusCode::OK,
        ServiceStatus::Degraded => StatusCode::SERVICE_UNAVAILABLE,
    };

    (code, Json(response))
}

async fn check_database(state: &AppState) -> ComponentCheck {
    match ping(&state.pool).await {
        Ok(()) => ComponentCheck {
            status: ComponentStatus::Ok,
            message: Some("Connected".to_string()),
        },
        Err(e) => {
            tracing::warn!(error = %e, "database health check failed");
            ComponentCheck {
                status: ComponentStatus::Error,
                message: Some(format!("Database error: {}", e)),
            }
        }
    }
}
