//! Stockroom: inventory management backend and client data store.

pub mod auth;
pub mod client;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
pub mod validation;

pub use auth::TokenSigner;
pub use client::{HttpBackend, InventoryBackend, InventoryStore};
pub use config::Config;
pub use db::{connect, ensure_tables};
pub use error::AppError;
pub use routes::{api_routes, common_routes};
pub use state::AppState;
