//! Point balance and history handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use point_ledger_core::{PointHistory, UserPoint};

use crate::error::ApiError;
use crate::state::AppState;

/// Charge/use request body.
///
/// The amount is optional on the wire; a missing amount flows through to
/// the ledger and fails validation there, like any other bad amount.
#[derive(Debug, Deserialize)]
pub struct AmountRequest {
    /// Points to charge or use.
    pub amount: Option<i64>,
}

/// Balance response.
#[derive(Debug, Serialize)]
pub struct PointResponse {
    /// The user id.
    pub user_id: i64,
    /// Current balance.
    pub point: i64,
    /// When the balance last changed.
    pub updated_at: String,
}

impl From<&UserPoint> for PointResponse {
    fn from(record: &UserPoint) -> Self {
        Self {
            user_id: record.user_id,
            point: record.point,
            updated_at: record.updated_at.to_rfc3339(),
        }
    }
}

/// History entry response.
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    /// Store-assigned entry id.
    pub id: i64,
    /// The user whose balance changed.
    pub user_id: i64,
    /// The amount charged or used.
    pub amount: i64,
    /// "charge" or "use".
    #[serde(rename = "type")]
    pub kind: String,
    /// When the operation was accepted.
    pub created_at: String,
}

impl From<&PointHistory> for HistoryResponse {
    fn from(row: &PointHistory) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            amount: row.amount,
            kind: format!("{:?}", row.kind).to_lowercase(),
            created_at: row.created_at.to_rfc3339(),
        }
    }
}

/// Get a user's current point balance.
pub async fn balance(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
) -> Result<Json<PointResponse>, ApiError> {
    let record = state.ledger.balance(user_id).await?;
    Ok(Json(PointResponse::from(&record)))
}

/// List a user's charge/use history, ascending by id.
pub async fn histories(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<HistoryResponse>>, ApiError> {
    let rows = state.ledger.history(user_id).await?;
    Ok(Json(rows.iter().map(HistoryResponse::from).collect()))
}

/// Add points to a user's balance.
pub async fn charge(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
    Json(body): Json<AmountRequest>,
) -> Result<Json<PointResponse>, ApiError> {
    let record = state.ledger.charge(user_id, body.amount).await?;
    Ok(Json(PointResponse::from(&record)))
}

/// Deduct points from a user's balance.
pub async fn use_points(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
    Json(body): Json<AmountRequest>,
) -> Result<Json<PointResponse>, ApiError> {
    let record = state.ledger.use_points(user_id, body.amount).await?;
    Ok(Json(PointResponse::from(&record)))
}
