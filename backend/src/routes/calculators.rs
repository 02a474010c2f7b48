//! Calculator API routes
//!
//! Anonymous-friendly endpoints: results can be attached to a logged-in
//! user id or to an opaque session id, so nothing here requires auth.

use crate::error::ApiError;
use crate::repositories::{HistoryQuery, HistoryRepository, StoredCalculatorResult};
use crate::services::CalculatorService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use fittools_engine::record::CalculatorResultRecord;
use fittools_engine::{CalculatorResult, CalculatorType};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

/// Create calculator routes
pub fn calculator_routes() -> Router<AppState> {
    Router::new()
        .route("/save", post(save_result))
        .route("/history", get(get_history))
        .route("/:calculator_type", post(compute))
}

// ============================================================================
// Compute
// ============================================================================

/// Request body for the compute endpoint
#[derive(Debug, Deserialize)]
pub struct ComputeRequest {
    pub inputs: Value,
    #[serde(default)]
    pub user_id: Option<Uuid>,
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Compute endpoint response
#[derive(Debug, Serialize)]
pub struct ComputeResponse {
    pub calculator_type: CalculatorType,
    pub result: CalculatorResult,
}

/// POST /api/v1/calculators/:calculator_type - Run a calculator
///
/// Computes synchronously and responds immediately. When a user or
/// session id is supplied the result is saved to history in a spawned
/// task; a failed save is logged but never fails the response.
async fn compute(
    State(state): State<AppState>,
    Path(calculator_type): Path<CalculatorType>,
    Json(req): Json<ComputeRequest>,
) -> Result<Json<ComputeResponse>, ApiError> {
    let result = CalculatorService::compute(calculator_type, &req.inputs)?;

    if req.user_id.is_some() || req.session_id.is_some() {
        let mut record = CalculatorResultRecord::new(calculator_type, req.inputs, result.clone());
        if let Some(user_id) = req.user_id {
            record = record.for_user(user_id);
        } else if let Some(session_id) = req.session_id {
            record = record.for_session(session_id);
        }
        spawn_save(state.db.clone(), record);
    }

    Ok(Json(ComputeResponse {
        calculator_type,
        result,
    }))
}

/// Save a record without blocking the response
fn spawn_save(pool: PgPool, record: CalculatorResultRecord) {
    tokio::spawn(async move {
        if let Err(e) = HistoryRepository::create(&pool, &record).await {
            warn!(
                calculator_type = record.calculator_type.as_str(),
                "Failed to save calculator result: {}", e
            );
        }
    });
}

// ============================================================================
// Save
// ============================================================================

/// Request body for the explicit save endpoint
///
/// Used by clients that computed locally (e.g. via the WASM module) and
/// want the result in their history.
#[derive(Debug, Deserialize)]
pub struct SaveRequest {
    pub calculator_type: CalculatorType,
    pub inputs: Value,
    pub results: CalculatorResult,
    #[serde(default)]
    pub user_id: Option<Uuid>,
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Save endpoint response
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// POST /api/v1/calculators/save - Save a precomputed result
///
/// Anonymous callers get a fresh session id minted for them; the client
/// is expected to send it back on subsequent saves and history reads.
async fn save_result(
    State(state): State<AppState>,
    Json(req): Json<SaveRequest>,
) -> Result<Json<SaveResponse>, ApiError> {
    let mut record = CalculatorResultRecord::new(req.calculator_type, req.inputs, req.results);

    let minted_session = if let Some(user_id) = req.user_id {
        record = record.for_user(user_id);
        None
    } else {
        let session_id = req
            .session_id
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        record = record.for_session(session_id.clone());
        Some(session_id)
    };

    let stored = HistoryRepository::create(state.db(), &record).await?;

    Ok(Json(SaveResponse {
        id: stored.id,
        session_id: minted_session,
        created_at: stored.created_at,
    }))
}

// ============================================================================
// History
// ============================================================================

/// Query parameters for history retrieval
#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    pub user_id: Option<Uuid>,
    pub session_id: Option<String>,
    pub calculator_type: Option<CalculatorType>,
    pub limit: Option<i64>,
}

/// A single history entry as returned to clients
#[derive(Debug, Serialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub calculator_type: String,
    pub inputs: Value,
    pub results: Value,
    pub created_at: DateTime<Utc>,
}

/// History endpoint response
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub items: Vec<HistoryEntry>,
    pub count: usize,
}

/// GET /api/v1/calculators/history - Get saved results, newest first
///
/// Exactly one of `user_id` or `session_id` must be supplied. `limit`
/// defaults to 10 and is capped at the configured maximum.
async fn get_history(
    State(state): State<AppState>,
    Query(params): Query<HistoryParams>,
) -> Result<Json<HistoryResponse>, ApiError> {
    match (&params.user_id, &params.session_id) {
        (None, None) => {
            return Err(ApiError::BadRequest(
                "Either user_id or session_id is required".to_string(),
            ))
        }
        (Some(_), Some(_)) => {
            return Err(ApiError::BadRequest(
                "Provide user_id or session_id, not both".to_string(),
            ))
        }
        _ => {}
    }

    let history = &state.config().history;
    let limit = params
        .limit
        .unwrap_or(history.default_limit)
        .clamp(1, history.max_limit);

    let query = HistoryQuery {
        user_id: params.user_id,
        session_id: params.session_id,
        calculator_type: params.calculator_type.map(|t| t.as_str().to_string()),
        limit,
    };

    let records = HistoryRepository::find(state.db(), &query).await?;

    let items: Vec<HistoryEntry> = records.into_iter().map(HistoryEntry::from).collect();
    let count = items.len();

    Ok(Json(HistoryResponse { items, count }))
}

impl From<StoredCalculatorResult> for HistoryEntry {
    fn from(stored: StoredCalculatorResult) -> Self {
        Self {
            id: stored.id,
            calculator_type: stored.calculator_type,
            inputs: stored.inputs,
            results: stored.results,
            created_at: stored.created_at,
        }
    }
}
