use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{self, NewRequest, Request};
use crate::state::AppState;
use crate::store;
use crate::validation;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Request>>, AppError> {
    let rows = store::requests::list(&state.pool).await?;
    Ok(Json(rows))
}

pub async fn create(
    State(state): State<AppState>,
    Json(mut body): Json<Value>,
) -> Result<(StatusCode, Json<Request>), AppError> {
    validation::normalize_quantity(&mut body)?;
    let payload: NewRequest = models::from_body(body)?;
    let row = store::requests::insert(&state.pool, Uuid::new_v4(), &payload).await?;
    Ok((StatusCode::CREATED, Json(row)))
}
