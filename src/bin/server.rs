//! Composition root: config from env, pool, startup DDL, routes, serve.

use axum::Router;
use stockroom::{api_routes, common_routes, AppState, Config, TokenSigner};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("stockroom=info")),
        )
        .init();

    let config = Config::from_env()?;
    let pool = stockroom::connect(&config.db).await?;
    stockroom::ensure_tables(&pool).await?;

    let state = AppState {
        pool,
        tokens: TokenSigner::new(&config.jwt_secret),
    };

    // The SPA is served from another origin.
    let app = Router::new()
        .merge(common_routes(state.clone()))
        .nest("/api", api_routes(state))
        .layer(CorsLayer::permissive())
        .layer(RequestBodyLimitLayer::new(2 * 1024 * 1024));

    let listener = TcpListener::bind(("0.0.0.0", config.listen_port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
