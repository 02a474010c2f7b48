//! Calculator result history repository

use anyhow::Result;
use chrono::{DateTime, Utc};
use fittools_engine::record::CalculatorResultRecord;
use sqlx::PgPool;
use uuid::Uuid;

/// Stored calculator result row
///
/// Inputs and results are kept as JSONB so every calculator shares one
/// table regardless of its input shape.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct StoredCalculatorResult {
    pub id: Uuid,
    pub calculator_type: String,
    pub user_id: Option<Uuid>,
    pub session_id: Option<String>,
    pub inputs: serde_json::Value,
    pub results: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

/// Filter parameters for history queries
///
/// Exactly one of `user_id` and `session_id` is expected; the route
/// layer enforces that before the query runs.
#[derive(Debug, Clone, Default)]
pub struct HistoryQuery {
    pub user_id: Option<Uuid>,
    pub session_id: Option<String>,
    pub calculator_type: Option<String>,
    pub limit: i64,
}

/// History repository for database operations
pub struct HistoryRepository;

impl HistoryRepository {
    /// Persist a calculator result record
    pub async fn create(
        pool: &PgPool,
        record: &CalculatorResultRecord,
    ) -> Result<StoredCalculatorResult> {
        let results = serde_json::to_value(&record.results)?;

        let stored = sqlx::query_as::<_, StoredCalculatorResult>(
            r#"
            INSERT INTO calculator_results (calculator_type, user_id, session_id, inputs, results, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, calculator_type, user_id, session_id, inputs, results, created_at
            "#,
        )
        .bind(record.calculator_type.as_str())
        .bind(record.user_id)
        .bind(&record.session_id)
        .bind(&record.inputs)
        .bind(results)
        .bind(record.created_at)
        .fetch_one(pool)
        .await?;

        Ok(stored)
    }

    /// Get recent results matching the query, newest first
    pub async fn find(pool: &PgPool, query: &HistoryQuery) -> Result<Vec<StoredCalculatorResult>> {
        let records = sqlx::query_as::<_, StoredCalculatorResult>(
            r#"
            SELECT id, calculator_type, user_id, session_id, inputs, results, created_at
            FROM calculator_results
            WHERE ($1::uuid IS NULL OR user_id = $1)
              AND ($2::text IS NULL OR session_id = $2)
              AND ($3::text IS NULL OR calculator_type = $3)
            ORDER BY created_at DESC
            LIMIT $4
            "#,
        )
        .bind(query.user_id)
        .bind(&query.session_id)
        .bind(&query.calculator_type)
        .bind(query.limit)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }
}
