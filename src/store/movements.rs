use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Movement, NewMovement};

/// Newest first: the movement log is read as a ledger.
pub async fn list(pool: &PgPool) -> Result<Vec<Movement>, AppError> {
    let rows =
        sqlx::query_as::<_, Movement>("SELECT * FROM movements ORDER BY created_at DESC")
            .fetch_all(pool)
            .await?;
    Ok(rows)
}

/// Append a ledger entry and adjust the product's running stock as one
/// transaction. Either both rows change or neither does.
pub async fn record(pool: &PgPool, id: Uuid, m: &NewMovement) -> Result<Movement, AppError> {
    let mut tx = pool.begin().await?;

    let row = sqlx::query_as::<_, Movement>(
        "INSERT INTO movements \
         (id, product_id, movement_type, quantity, reason, reference, user_id, cost) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
         RETURNING *",
    )
    .bind(id)
    .bind(m.product_id)
    .bind(m.movement_type)
    .bind(m.quantity)
    .bind(&m.reason)
    .bind(&m.reference)
    .bind(m.user_id)
    .bind(m.cost)
    .fetch_one(&mut *tx)
    .await?;

    let delta = m.movement_type.stock_delta(m.quantity);
    let updated = sqlx::query(
        "UPDATE products SET stock = stock + $1, updated_at = NOW() WHERE id = $2",
    )
    .bind(delta)
    .bind(m.product_id)
    .execute(&mut *tx)
    .await?;
    if updated.rows_affected() == 0 {
        // tx drops here, rolling back the inserted movement
        return Err(AppError::Validation(format!(
            "unknown product {}",
            m.product_id
        )));
    }

    tx.commit().await?;
    Ok(row)
}
