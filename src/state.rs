//! Shared application state for all routes.

use sqlx::PgPool;

use crate::auth::TokenSigner;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub tokens: TokenSigner,
}
