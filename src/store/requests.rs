use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{NewRequest, Request};

pub async fn list(pool: &PgPool) -> Result<Vec<Request>, AppError> {
    let rows = sqlx::query_as::<_, Request>("SELECT * FROM requests ORDER BY created_at DESC")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn insert(pool: &PgPool, id: Uuid, r: &NewRequest) -> Result<Request, AppError> {
    let status = r.status.as_deref().unwrap_or("pending");
    let row = sqlx::query_as::<_, Request>(
        "INSERT INTO requests (id, product_id, requested_by, quantity, reason, status) \
         VALUES ($1, $2, $3, $4, $5, $6) \
         RETURNING *",
    )
    .bind(id)
    .bind(r.product_id)
    .bind(&r.requested_by)
    .bind(r.quantity)
    .bind(&r.reason)
    .bind(status)
    .fetch_one(pool)
    .await?;
    Ok(row)
}
