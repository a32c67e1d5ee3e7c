//! One module per resource, mapping the REST contract onto the store.

pub mod movements;
pub mod products;
pub mod requests;
pub mod suppliers;
pub mod users;

use uuid::Uuid;

use crate::error::AppError;

fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::BadRequest("invalid id".into()))
}
