use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{NewUser, PublicUser, User};

/// Password hashes never leave this module's `User`; listings select the
/// public columns only.
pub async fn list(pool: &PgPool) -> Result<Vec<PublicUser>, AppError> {
    let rows = sqlx::query_as::<_, PublicUser>(
        "SELECT id, name, username, email, role, is_active, created_at FROM users",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_by_username(pool: &PgPool, username: &str) -> Result<Option<User>, AppError> {
    let row = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
        .bind(username)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn insert(pool: &PgPool, id: Uuid, u: &NewUser) -> Result<User, AppError> {
    let row = sqlx::query_as::<_, User>(
        "INSERT INTO users (id, name, username, email, password_hash, role, is_active) \
         VALUES ($1, $2, $3, $4, $5, $6, $7) \
         RETURNING *",
    )
    .bind(id)
    .bind(&u.name)
    .bind(&u.username)
    .bind(&u.email)
    .bind(&u.password_hash)
    .bind(u.role)
    .bind(u.is_active)
    .fetch_one(pool)
    .await?;
    Ok(row)
}
