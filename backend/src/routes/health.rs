//! Health probes for the calculator service.
//!
//! The service has a single external dependency, the Postgres pool
//! behind calculation history. `/health` and `/health/live` answer
//! without touching it; `/health/ready` pings it and returns 503 when
//! it is unreachable. Calculations themselves are pure and keep working
//! while history storage is down, which is why only readiness gates on
//! the database.

use crate::{db, state::AppState};
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseStatus>,
}

/// Outcome of the history-database ping, only present on readiness.
#[derive(Serialize)]
pub struct DatabaseStatus {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthResponse {
    fn probe(status: &str) -> Self {
        Self {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            database: None,
        }
    }
}

/// Basic health check, no dependency probing.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::probe("healthy"))
}

/// Readiness probe. Pings the history database and reports 503 with
/// the failure message when it is unreachable.
pub async fn readiness_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    match db::health_check(state.db()).await {
        Ok(()) => {
            let mut response = HealthResponse::probe("ready");
            response.database = Some(DatabaseStatus {
                status: "healthy".to_string(),
                error: None,
            });
            Ok(Json(response))
        }
        Err(e) => {
            let mut response = HealthResponse::probe("not_ready");
            response.database = Some(DatabaseStatus {
                status: "unhealthy".to_string(),
                error: Some(e.to_string()),
            });
            Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
        }
    }
}

/// Liveness probe, answers as long as the process serves requests.
pub async fn liveness_check() -> Json<HealthResponse> {
    Json(HealthResponse::probe("alive"))
}
