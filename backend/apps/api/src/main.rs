//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; application-level errors use the
//! per-crate error enums built on `kernel::error::AppError`.

use auth::{AuthConfig, AuthGateState, PgAccountRepository, user_router};
use axum::{
    Json, Router,
    http::{Method, StatusCode, header},
};
use catalog::{CatalogConfig, PgCatalogRepository, orders_router, products_router};
use serde_json::json;
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,catalog=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL")?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Token signing secret; supplied out-of-band, absence is a startup error
    let auth_config = Arc::new(auth_config_from_env(env::var("TOKEN_SECRET").ok())?);

    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    // Base URL rendered into the response hyperlink hints
    let catalog_config = Arc::new(CatalogConfig::new(
        env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| format!("http://localhost:{port}")),
    ));

    let gate = AuthGateState {
        config: auth_config.clone(),
    };

    // CORS: open API, bearer tokens carry the authentication
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::ORIGIN,
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]));

    // Build router
    let app = Router::new()
        .nest(
            "/user",
            user_router(PgAccountRepository::new(pool.clone()), auth_config.clone()),
        )
        .nest(
            "/products",
            products_router(
                PgCatalogRepository::new(pool.clone()),
                catalog_config.clone(),
                gate.clone(),
            ),
        )
        .nest(
            "/orders",
            orders_router(
                PgCatalogRepository::new(pool.clone()),
                catalog_config.clone(),
                gate,
            ),
        )
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the auth configuration from the `TOKEN_SECRET` environment value.
/// A missing or empty secret is a configuration error, never worked around.
fn auth_config_from_env(secret: Option<String>) -> anyhow::Result<AuthConfig> {
    match secret {
        Some(secret) if !secret.is_empty() => Ok(AuthConfig::new(secret.into_bytes())),
        _ => anyhow::bail!("TOKEN_SECRET must be set"),
    }
}

/// JSON 404 for unmatched routes
async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "message": "Not found" })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_token_secret_is_a_startup_error() {
        assert!(auth_config_from_env(None).is_err());
        assert!(auth_config_from_env(Some(String::new())).is_err());
    }

    #[test]
    fn test_token_secret_is_carried_into_config() {
        let config = auth_config_from_env(Some("s3cret".to_string())).unwrap();
        assert_eq!(config.token_secret, b"s3cret");
    }
}
