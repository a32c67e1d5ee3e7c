use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{self, Movement, NewMovement};
use crate::state::AppState;
use crate::store;
use crate::validation;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Movement>>, AppError> {
    let rows = store::movements::list(&state.pool).await?;
    Ok(Json(rows))
}

/// POST /api/movements — appends the ledger entry and adjusts the product's
/// stock in one transaction.
pub async fn create(
    State(state): State<AppState>,
    Json(mut body): Json<Value>,
) -> Result<(StatusCode, Json<Movement>), AppError> {
    validation::normalize_quantity(&mut body)?;
    let payload: NewMovement = models::from_body(body)?;
    let row = store::movements::record(&state.pool, Uuid::new_v4(), &payload).await?;
    Ok((StatusCode::CREATED, Json(row)))
}
