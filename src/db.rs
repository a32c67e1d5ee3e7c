//! Connection pool construction and startup DDL.

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions, PgSslMode};

use crate::config::DbConfig;
use crate::error::AppError;

/// Build the process-wide pool from discrete credentials. When a CA
/// certificate is configured the connection is encrypted and the server
/// certificate validated against it (managed-database setups).
pub async fn connect(cfg: &DbConfig) -> Result<PgPool, AppError> {
    let mut opts = PgConnectOptions::new()
        .host(&cfg.host)
        .port(cfg.port)
        .username(&cfg.user)
        .password(&cfg.password)
        .database(&cfg.name);
    if let Some(ca) = &cfg.ca_cert {
        opts = opts.ssl_mode(PgSslMode::VerifyCa).ssl_root_cert(ca);
    }
    let pool = PgPoolOptions::new()
        .max_connections(cfg.pool_size)
        .connect_with(opts)
        .await?;
    Ok(pool)
}

/// Idempotent schema setup: enum types and the five tables. Safe to run on
/// every process start.
///
/// No foreign keys: the storage engine enforces nothing across tables, so
/// product deletion always succeeds and movements keep their ledger rows
/// even when the referenced product is gone.
pub async fn ensure_tables(pool: &PgPool) -> Result<(), AppError> {
    for ty in [
        "DO $$ BEGIN CREATE TYPE movement_type AS ENUM ('entry', 'exit'); EXCEPTION WHEN duplicate_object THEN NULL; END $$",
        "DO $$ BEGIN CREATE TYPE user_role AS ENUM ('admin', 'manager', 'employee'); EXCEPTION WHEN duplicate_object THEN NULL; END $$",
    ] {
        sqlx::query(ty).execute(pool).await?;
    }

    let tables = [
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id UUID PRIMARY KEY,
            name TEXT NOT NULL,
            sku TEXT NOT NULL,
            category TEXT,
            description TEXT,
            price NUMERIC(12,2) NOT NULL DEFAULT 0,
            stock INTEGER NOT NULL DEFAULT 0,
            min_stock_level INTEGER,
            max_stock_level INTEGER,
            supplier_id UUID,
            unit_of_measure TEXT,
            location TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS suppliers (
            id UUID PRIMARY KEY,
            name TEXT NOT NULL,
            contact_person TEXT,
            phone TEXT,
            email TEXT,
            address TEXT,
            ruc TEXT,
            is_active BOOLEAN NOT NULL DEFAULT TRUE,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id UUID PRIMARY KEY,
            name TEXT NOT NULL,
            username TEXT NOT NULL UNIQUE,
            email TEXT,
            password_hash TEXT NOT NULL,
            role user_role NOT NULL DEFAULT 'employee',
            is_active BOOLEAN NOT NULL DEFAULT TRUE,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS movements (
            id UUID PRIMARY KEY,
            product_id UUID NOT NULL,
            movement_type movement_type NOT NULL,
            quantity INTEGER NOT NULL,
            reason TEXT,
            reference TEXT,
            user_id UUID,
            cost NUMERIC(12,2),
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS requests (
            id UUID PRIMARY KEY,
            product_id UUID NOT NULL,
            requested_by TEXT NOT NULL,
            quantity INTEGER NOT NULL,
            reason TEXT,
            status TEXT NOT NULL DEFAULT 'pending',
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ];
    for ddl in tables {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}
