use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{NewSupplier, Supplier};

pub async fn list(pool: &PgPool) -> Result<Vec<Supplier>, AppError> {
    let rows = sqlx::query_as::<_, Supplier>("SELECT * FROM suppliers")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn insert(pool: &PgPool, id: Uuid, s: &NewSupplier) -> Result<Supplier, AppError> {
    let row = sqlx::query_as::<_, Supplier>(
        "INSERT INTO suppliers (id, name, contact_person, phone, email, address, ruc, is_active) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
         RETURNING *",
    )
    .bind(id)
    .bind(&s.name)
    .bind(&s.contact_person)
    .bind(&s.phone)
    .bind(&s.email)
    .bind(&s.address)
    .bind(&s.ruc)
    .bind(s.is_active)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

/// Returns the number of rows deleted; the handler turns 0 into a 404.
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64, AppError> {
    let result = sqlx::query("DELETE FROM suppliers WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
