use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use super::parse_id;
use crate::error::AppError;
use crate::models::{self, NewProduct, Product, ProductChanges};
use crate::state::AppState;
use crate::store;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Product>>, AppError> {
    let rows = store::products::list(&state.pool).await?;
    Ok(Json(rows))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    let payload: NewProduct = models::from_body(body)?;
    let row = store::products::insert(&state.pool, Uuid::new_v4(), &payload).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// PUT /api/products/:id — partial update. Responds 200 with the updated
/// row, or 200 with `null` when the id does not exist (the SPA checks for
/// null rather than a 404).
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Option<Product>>, AppError> {
    let id = parse_id(&id)?;
    let changes: ProductChanges = models::from_body(body)?;
    let row = store::products::update(&state.pool, id, &changes).await?;
    Ok(Json(row))
}

/// DELETE /api/products/:id — reports success whether or not a row existed.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let id = parse_id(&id)?;
    store::products::delete(&state.pool, id).await?;
    Ok(Json(json!({ "message": "Product deleted" })))
}
