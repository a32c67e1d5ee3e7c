use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::auth;
use crate::error::AppError;
use crate::models::{
    self, LoginPayload, LoginResponse, NewUser, PublicUser, RegisterPayload, Role, SessionUser,
};
use crate::state::AppState;
use crate::store;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<PublicUser>>, AppError> {
    let rows = store::users::list(&state.pool).await?;
    Ok(Json(rows))
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let payload: RegisterPayload = models::from_body(body)?;
    let password_hash = auth::hash_password(&payload.password)?;
    let user = NewUser {
        // display name falls back to the username
        name: payload.name.unwrap_or_else(|| payload.username.clone()),
        username: payload.username,
        email: payload.email,
        password_hash,
        role: payload.role.unwrap_or(Role::Employee),
        is_active: payload.is_active,
    };
    let id = Uuid::new_v4();
    store::users::insert(&state.pool, id, &user).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "user registered", "id": id })),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<LoginResponse>, AppError> {
    let payload: LoginPayload = models::from_body(body)?;
    let user = store::users::find_by_username(&state.pool, &payload.username)
        .await?
        .ok_or_else(|| AppError::Unauthorized("invalid username or password".into()))?;
    if !auth::verify_password(&payload.password, &user.password_hash) {
        return Err(AppError::Unauthorized(
            "invalid username or password".into(),
        ));
    }
    let token = state.tokens.sign(user.id, user.role)?;
    Ok(Json(LoginResponse {
        token,
        user: SessionUser {
            id: user.id,
            name: user.name,
            role: user.role,
        },
    }))
}
