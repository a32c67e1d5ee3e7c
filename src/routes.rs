//! Route tables: the /api resource surface plus health/readiness/version.

use axum::{
    extract::State,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Serialize;

use crate::handlers::{movements, products, requests, suppliers, users};
use crate::state::AppState;

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/products", get(products::list).post(products::create))
        .route(
            "/products/:id",
            put(products::update).delete(products::remove),
        )
        .route("/suppliers", get(suppliers::list).post(suppliers::create))
        .route("/suppliers/:id", delete(suppliers::remove))
        .route("/movements", get(movements::list).post(movements::create))
        .route("/requests", get(requests::list).post(requests::create))
        .route("/users", get(users::list))
        .route("/users/register", post(users::register))
        .route("/users/login", post(users::login))
        .with_state(state)
}

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadyBody {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<&'static str>,
}

async fn root() -> &'static str {
    "stockroom API running"
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

async fn ready(
    State(state): State<AppState>,
) -> Result<Json<ReadyBody>, (axum::http::StatusCode, Json<ReadyBody>)> {
    if sqlx::query("SELECT 1")
        .fetch_optional(&state.pool)
        .await
        .is_err()
    {
        return Err((
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadyBody {
                status: "degraded",
                database: Some("unavailable"),
            }),
        ));
    }
    Ok(Json(ReadyBody {
        status: "ok",
        database: Some("ok"),
    }))
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Liveness, readiness and version, mounted at the root alongside /api.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::TokenSigner;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    // A pool that never connects: validation paths reject before any
    // statement runs, so these tests need no database.
    fn test_state() -> AppState {
        let opts = sqlx::postgres::PgConnectOptions::new()
            .host("localhost")
            .database("unused");
        let pool = sqlx::postgres::PgPoolOptions::new().connect_lazy_with(opts);
        AppState {
            pool,
            tokens: TokenSigner::new("test-secret"),
        }
    }

    #[tokio::test]
    async fn health_is_ok() {
        let app = common_routes(test_state());
        let resp = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn version_names_the_crate() {
        let app = common_routes(test_state());
        let resp = app
            .oneshot(Request::get("/version").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        let v: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(v["name"], "stockroom");
    }

    async fn post_json(app: Router, path: &str, body: serde_json::Value) -> StatusCode {
        let resp = app
            .oneshot(
                Request::post(path)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        resp.status()
    }

    #[tokio::test]
    async fn request_create_rejects_bad_quantities() {
        for quantity in [
            serde_json::json!(0),
            serde_json::json!(-5),
            serde_json::json!("abc"),
        ] {
            let app = api_routes(test_state());
            let body = serde_json::json!({
                "productId": uuid::Uuid::new_v4().to_string(),
                "requestedBy": "ana",
                "quantity": quantity.clone(),
                "reason": "low stock"
            });
            let status = post_json(app, "/requests", body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "quantity {}", quantity);
        }
    }

    #[tokio::test]
    async fn request_create_rejects_missing_quantity() {
        let app = api_routes(test_state());
        let body = serde_json::json!({
            "productId": uuid::Uuid::new_v4().to_string(),
            "requestedBy": "ana"
        });
        let status = post_json(app, "/requests", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn movement_create_rejects_nonpositive_quantity() {
        let app = api_routes(test_state());
        let body = serde_json::json!({
            "productId": uuid::Uuid::new_v4().to_string(),
            "type": "entry",
            "quantity": 0
        });
        let status = post_json(app, "/movements", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn product_update_rejects_malformed_id() {
        let app = api_routes(test_state());
        let resp = app
            .oneshot(
                Request::put("/products/not-a-uuid")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"stock": 5}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
