use axum::Json;

use crate::domain::HealthStatus;

/// Liveness probe. Ignores the request entirely and never fails.
#[tracing::instrument(name = "Health check")]
pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus::healthy())
}
