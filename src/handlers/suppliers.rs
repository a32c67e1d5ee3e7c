use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use super::parse_id;
use crate::error::AppError;
use crate::models::{self, NewSupplier, Supplier};
use crate::state::AppState;
use crate::store;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Supplier>>, AppError> {
    let rows = store::suppliers::list(&state.pool).await?;
    Ok(Json(rows))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Supplier>), AppError> {
    let payload: NewSupplier = models::from_body(body)?;
    let row = store::suppliers::insert(&state.pool, Uuid::new_v4(), &payload).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// DELETE /api/suppliers/:id — unlike products, a missing supplier is a 404.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let id = parse_id(&id)?;
    let deleted = store::suppliers::delete(&state.pool, id).await?;
    if deleted == 0 {
        return Err(AppError::NotFound(format!("supplier {}", id)));
    }
    Ok(Json(json!({ "message": "Supplier deleted" })))
}
