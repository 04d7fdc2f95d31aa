//! Health check endpoint
//!
//! Provides the readiness probe polled by the orchestrator. The probe
//! succeeds only when the server is running AND the database is reachable,
//! so it fails until the database has completed its own startup.
//!
//! # Endpoint
//!
//! ```text
//! GET /health
//! ```
//!
//! # Response
//!
//! ```json
//! {
//!   "status": "healthy",
//!   "version": "0.1.0",
//!   "database": "connected"
//! }
//! ```

use crate::{
    app::AppState,
    db,
    error::{ApiError, ApiResult, ErrorResponse},
};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Application version
    pub version: String,

    /// Database status
    pub database: String,
}

/// Health check handler
///
/// Returns 200 with service health status when the database is reachable,
/// 503 otherwise. Orchestrators poll this endpoint to decide whether the
/// service is safe to route traffic to.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is ready to handle traffic", body = HealthResponse),
        (status = 503, description = "Database is unreachable", body = ErrorResponse),
    ),
)]
pub async fn health_check(State(state): State<AppState>) -> ApiResult<Json<HealthResponse>> {
    // Check database connectivity
    db::pool::health_check(&state.db).await.map_err(|err| {
        tracing::warn!(error = %err, "Health check failed: database unreachable");
        ApiError::ServiceUnavailable("database unreachable".to_string())
    })?;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: crate::VERSION.to_string(),
        database: "connected".to_string(),
    }))
}
