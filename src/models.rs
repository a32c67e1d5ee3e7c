//! Entity types and request payloads.
//!
//! Wire format is camelCase (what the SPA sends and receives); struct fields
//! are snake_case and match the storage column names exactly, so the serde
//! attributes on each type are the single mapping between the two. A few
//! wire names are not the camel form of their column (`minStock` is stored
//! as `min_stock_level`, `unit` as `unit_of_measure`) and carry explicit
//! renames.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::AppError;

/// Deserialize a request body that has already passed boundary validation.
/// Shape mismatches surface as 400, not axum's default rejection.
pub fn from_body<T: DeserializeOwned>(body: Value) -> Result<T, AppError> {
    serde_json::from_value(body).map_err(|e| AppError::BadRequest(format!("invalid body: {}", e)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "movement_type", rename_all = "lowercase")]
pub enum MovementType {
    Entry,
    Exit,
}

impl MovementType {
    /// Signed stock adjustment for a movement of `quantity` units.
    pub fn stock_delta(self, quantity: i32) -> i32 {
        match self {
            MovementType::Entry => quantity,
            MovementType::Exit => -quantity,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    Employee,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub sku: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: i32,
    #[serde(rename = "minStock")]
    pub min_stock_level: Option<i32>,
    #[serde(rename = "maxStock")]
    pub max_stock_level: Option<i32>,
    pub supplier_id: Option<Uuid>,
    #[serde(rename = "unit")]
    pub unit_of_measure: Option<String>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub sku: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Decimal,
    #[serde(default)]
    pub stock: i32,
    #[serde(default, rename = "minStock")]
    pub min_stock_level: Option<i32>,
    #[serde(default, rename = "maxStock")]
    pub max_stock_level: Option<i32>,
    #[serde(default)]
    pub supplier_id: Option<Uuid>,
    #[serde(default, rename = "unit")]
    pub unit_of_measure: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// Partial update for a product. Absent fields are left untouched; the
/// update always refreshes `updated_at`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductChanges {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<i32>,
    #[serde(default, rename = "minStock", skip_serializing_if = "Option::is_none")]
    pub min_stock_level: Option<i32>,
    #[serde(default, rename = "maxStock", skip_serializing_if = "Option::is_none")]
    pub max_stock_level: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<Uuid>,
    #[serde(default, rename = "unit", skip_serializing_if = "Option::is_none")]
    pub unit_of_measure: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: Uuid,
    pub name: String,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub ruc: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSupplier {
    pub name: String,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub ruc: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Movement {
    pub id: Uuid,
    pub product_id: Uuid,
    #[serde(rename = "type")]
    pub movement_type: MovementType,
    pub quantity: i32,
    pub reason: Option<String>,
    pub reference: Option<String>,
    pub user_id: Option<Uuid>,
    pub cost: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMovement {
    pub product_id: Uuid,
    #[serde(rename = "type")]
    pub movement_type: MovementType,
    pub quantity: i32,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub user_id: Option<Uuid>,
    #[serde(default)]
    pub cost: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub id: Uuid,
    pub product_id: Uuid,
    pub requested_by: String,
    pub quantity: i32,
    pub reason: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRequest {
    pub product_id: Uuid,
    pub requested_by: String,
    pub quantity: i32,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Full user row, password hash included. Internal only; API responses use
/// [`PublicUser`].
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub username: String,
    pub email: Option<String>,
    pub password_hash: String,
    pub role: Role,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: Uuid,
    pub name: String,
    pub username: String,
    pub email: Option<String>,
    pub role: Role,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for PublicUser {
    fn from(u: User) -> Self {
        PublicUser {
            id: u.id,
            name: u.name,
            username: u.username,
            email: u.email,
            role: u.role,
            is_active: u.is_active,
            created_at: u.created_at,
        }
    }
}

/// Insert-ready user record; the handler has already hashed the password
/// and resolved defaults from [`RegisterPayload`].
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub username: String,
    pub email: Option<String>,
    pub password_hash: String,
    pub role: Role,
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPayload {
    #[serde(default)]
    pub name: Option<String>,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    pub password: String,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoginPayload {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: SessionUser,
}

/// The slice of the user echoed back on login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: Uuid,
    pub name: String,
    pub role: Role,
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn product_wire_names() {
        let p = Product {
            id: Uuid::nil(),
            name: "Cemento".into(),
            sku: "CEM-01".into(),
            category: Some("construccion".into()),
            description: None,
            price: Decimal::new(2599, 2),
            stock: 12,
            min_stock_level: Some(5),
            max_stock_level: Some(50),
            supplier_id: None,
            unit_of_measure: Some("bag".into()),
            location: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let v = serde_json::to_value(&p).unwrap();
        let obj = v.as_object().unwrap();
        for key in ["minStock", "maxStock", "unit", "supplierId", "createdAt", "updatedAt"] {
            assert!(obj.contains_key(key), "missing wire key {}", key);
        }
        assert!(!obj.contains_key("min_stock_level"));
        // NUMERIC survives as a string, like the original driver returned it
        assert_eq!(v["price"], json!("25.99"));
    }

    #[test]
    fn movement_type_is_lowercase_on_the_wire() {
        assert_eq!(serde_json::to_value(MovementType::Entry).unwrap(), json!("entry"));
        assert_eq!(serde_json::to_value(MovementType::Exit).unwrap(), json!("exit"));
        let t: MovementType = serde_json::from_value(json!("exit")).unwrap();
        assert_eq!(t, MovementType::Exit);
    }

    #[test]
    fn stock_delta_sign() {
        assert_eq!(MovementType::Entry.stock_delta(10), 10);
        assert_eq!(MovementType::Exit.stock_delta(3), -3);
    }

    #[test]
    fn new_movement_accepts_type_key() {
        let m: NewMovement = from_body(json!({
            "productId": Uuid::new_v4().to_string(),
            "type": "entry",
            "quantity": 10
        }))
        .unwrap();
        assert_eq!(m.movement_type, MovementType::Entry);
        assert_eq!(m.quantity, 10);
        assert!(m.cost.is_none());
    }

    #[test]
    fn public_user_has_no_password_field() {
        let u = PublicUser {
            id: Uuid::nil(),
            name: "Ana".into(),
            username: "ana".into(),
            email: None,
            role: Role::Manager,
            is_active: true,
            created_at: Utc::now(),
        };
        let v = serde_json::to_value(&u).unwrap();
        let keys: Vec<&str> = v.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        assert!(!keys.iter().any(|k| k.contains("password")));
        assert_eq!(v["role"], json!("manager"));
    }

    #[test]
    fn from_body_rejects_wrong_shape() {
        let err = from_body::<NewSupplier>(json!({"isActive": true})).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
