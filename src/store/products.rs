use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{NewProduct, Product, ProductChanges};

pub async fn list(pool: &PgPool) -> Result<Vec<Product>, AppError> {
    let rows = sqlx::query_as::<_, Product>("SELECT * FROM products")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn fetch(pool: &PgPool, id: Uuid) -> Result<Option<Product>, AppError> {
    let row = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn insert(pool: &PgPool, id: Uuid, p: &NewProduct) -> Result<Product, AppError> {
    let row = sqlx::query_as::<_, Product>(
        "INSERT INTO products \
         (id, name, sku, category, description, price, stock, min_stock_level, max_stock_level, supplier_id, unit_of_measure, location) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
         RETURNING *",
    )
    .bind(id)
    .bind(&p.name)
    .bind(&p.sku)
    .bind(&p.category)
    .bind(&p.description)
    .bind(p.price)
    .bind(p.stock)
    .bind(p.min_stock_level)
    .bind(p.max_stock_level)
    .bind(p.supplier_id)
    .bind(&p.unit_of_measure)
    .bind(&p.location)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

/// Partial update: SET only the provided fields, always refreshing
/// `updated_at`. Returns the updated row, or `None` when the id is unknown.
pub async fn update(
    pool: &PgPool,
    id: Uuid,
    changes: &ProductChanges,
) -> Result<Option<Product>, AppError> {
    let mut qb = update_query(id, changes);
    let row = qb
        .build_query_as::<Product>()
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

fn update_query(id: Uuid, changes: &ProductChanges) -> QueryBuilder<'static, Postgres> {
    let mut qb: QueryBuilder<'static, Postgres> = QueryBuilder::new("UPDATE products SET ");
    let mut set = qb.separated(", ");
    if let Some(v) = &changes.name {
        set.push("name = ");
        set.push_bind_unseparated(v.clone());
    }
    if let Some(v) = &changes.sku {
        set.push("sku = ");
        set.push_bind_unseparated(v.clone());
    }
    if let Some(v) = &changes.category {
        set.push("category = ");
        set.push_bind_unseparated(v.clone());
    }
    if let Some(v) = &changes.description {
        set.push("description = ");
        set.push_bind_unseparated(v.clone());
    }
    if let Some(v) = changes.price {
        set.push("price = ");
        set.push_bind_unseparated(v);
    }
    if let Some(v) = changes.stock {
        set.push("stock = ");
        set.push_bind_unseparated(v);
    }
    if let Some(v) = changes.min_stock_level {
        set.push("min_stock_level = ");
        set.push_bind_unseparated(v);
    }
    if let Some(v) = changes.max_stock_level {
        set.push("max_stock_level = ");
        set.push_bind_unseparated(v);
    }
    if let Some(v) = changes.supplier_id {
        set.push("supplier_id = ");
        set.push_bind_unseparated(v);
    }
    if let Some(v) = &changes.unit_of_measure {
        set.push("unit_of_measure = ");
        set.push_bind_unseparated(v.clone());
    }
    if let Some(v) = &changes.location {
        set.push("location = ");
        set.push_bind_unseparated(v.clone());
    }
    set.push("updated_at = NOW()");
    qb.push(" WHERE id = ");
    qb.push_bind(id);
    qb.push(" RETURNING *");
    qb
}

/// Delete by id. Reports success regardless of whether a row existed.
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), AppError> {
    sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_query_sets_only_provided_fields() {
        let changes = ProductChanges {
            stock: Some(15),
            ..Default::default()
        };
        let sql = update_query(Uuid::nil(), &changes).into_sql();
        assert!(sql.contains("stock = $1"));
        assert!(sql.contains("updated_at = NOW()"));
        assert!(sql.contains("RETURNING *"));
        assert!(!sql.contains("name ="));
        assert!(!sql.contains("price ="));
    }

    #[test]
    fn update_query_with_no_fields_still_touches_updated_at() {
        let sql = update_query(Uuid::nil(), &ProductChanges::default()).into_sql();
        assert!(sql.starts_with("UPDATE products SET updated_at = NOW() WHERE id = "));
    }
}
