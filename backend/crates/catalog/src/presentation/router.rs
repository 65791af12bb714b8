//! Catalog Routers
//!
//! Products: reads are public, mutations sit behind the bearer gate.
//! Orders: every route sits behind the gate.

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use auth::{AuthGateState, require_bearer_auth};

use crate::application::config::CatalogConfig;
use crate::domain::repository::{OrderRepository, ProductRepository};
use crate::infra::postgres::PgCatalogRepository;
use crate::presentation::handlers::{self, CatalogAppState};

/// Create the product router with the PostgreSQL repository
pub fn products_router(
    repo: PgCatalogRepository,
    config: Arc<CatalogConfig>,
    gate: AuthGateState,
) -> Router {
    products_router_generic(repo, config, gate)
}

/// Create a generic product router for any repository implementation
pub fn products_router_generic<R>(repo: R, config: Arc<CatalogConfig>, gate: AuthGateState) -> Router
where
    R: ProductRepository + OrderRepository + Clone + Send + Sync + 'static,
{
    let state = CatalogAppState {
        repo: Arc::new(repo),
        config,
    };

    let public = Router::new()
        .route("/", get(handlers::list_products::<R>))
        .route("/{productId}", get(handlers::get_product::<R>));

    let protected = Router::new()
        .route("/", post(handlers::create_product::<R>))
        .route(
            "/{productId}",
            axum::routing::patch(handlers::update_product::<R>)
                .delete(handlers::delete_product::<R>),
        )
        .route_layer(middleware::from_fn_with_state(gate, require_bearer_auth));

    public.merge(protected).with_state(state)
}

/// Create the order router with the PostgreSQL repository
pub fn orders_router(
    repo: PgCatalogRepository,
    config: Arc<CatalogConfig>,
    gate: AuthGateState,
) -> Router {
    orders_router_generic(repo, config, gate)
}

/// Create a generic order router for any repository implementation
pub fn orders_router_generic<R>(repo: R, config: Arc<CatalogConfig>, gate: AuthGateState) -> Router
where
    R: ProductRepository + OrderRepository + Clone + Send + Sync + 'static,
{
    let state = CatalogAppState {
        repo: Arc::new(repo),
        config,
    };

    Router::new()
        .route(
            "/",
            get(handlers::list_orders::<R>).post(handlers::create_order::<R>),
        )
        .route(
            "/{orderId}",
            get(handlers::get_order::<R>).delete(handlers::delete_order::<R>),
        )
        .route_layer(middleware::from_fn_with_state(gate, require_bearer_auth))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    use auth::AuthConfig;
    use platform::token::{self, Claims};

    use crate::application::testing::MemCatalogRepository;

    fn auth_config() -> Arc<AuthConfig> {
        Arc::new(AuthConfig::with_random_secret())
    }

    fn bearer(config: &AuthConfig) -> String {
        let claims = Claims::with_ttl(
            "11111111-1111-1111-1111-111111111111".to_string(),
            "shopper@example.com".to_string(),
            Duration::from_secs(60),
        );
        format!("Bearer {}", token::sign(&claims, &config.token_secret).unwrap())
    }

    fn products_app(auth_config: Arc<AuthConfig>) -> Router {
        products_router_generic(
            MemCatalogRepository::default(),
            Arc::new(CatalogConfig::default()),
            AuthGateState {
                config: auth_config,
            },
        )
    }

    fn orders_app(repo: MemCatalogRepository, auth_config: Arc<AuthConfig>) -> Router {
        orders_router_generic(
            repo,
            Arc::new(CatalogConfig::default()),
            AuthGateState {
                config: auth_config,
            },
        )
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_product_list_is_public() {
        let app = products_app(auth_config());

        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["count"], 0);
        assert_eq!(body["products"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_product_create_requires_token() {
        let app = products_app(auth_config());

        let response = app
            .oneshot(
                Request::post("/")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"name":"Harry Potter 5","price":9.99}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Auth failed");
    }

    #[tokio::test]
    async fn test_product_create_with_token() {
        let config = auth_config();
        let app = products_app(config.clone());

        let response = app
            .oneshot(
                Request::post("/")
                    .header(header::AUTHORIZATION, bearer(&config))
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"name":"Harry Potter 5","price":9.99}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Created product successfully");
        assert_eq!(body["createdProduct"]["name"], "Harry Potter 5");
        assert_eq!(body["createdProduct"]["request"]["type"], "GET");
    }

    #[tokio::test]
    async fn test_get_missing_product_message() {
        let app = products_app(auth_config());

        let response = app
            .oneshot(
                Request::get("/22222222-2222-2222-2222-222222222222")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["message"], "No valid entry found for provided ID");
    }

    #[tokio::test]
    async fn test_get_product_with_malformed_id_is_bad_request() {
        let app = products_app(auth_config());

        let response = app
            .oneshot(Request::get("/not-a-uuid").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_patch_with_unknown_property_is_bad_request() {
        let config = auth_config();
        let app = products_app(config.clone());

        let response = app
            .oneshot(
                Request::patch("/22222222-2222-2222-2222-222222222222")
                    .header(header::AUTHORIZATION, bearer(&config))
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"[{"propName":"stock","value":4}]"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_orders_are_fully_gated() {
        let config = auth_config();
        let repo = MemCatalogRepository::default();
        let app = orders_app(repo, config);

        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Auth failed");
    }

    #[tokio::test]
    async fn test_order_flow_with_token() {
        let config = auth_config();

        // seed a product directly, then drive the order routes
        let repo = MemCatalogRepository::default();
        let product = crate::application::CreateProductUseCase::new(Arc::new(repo.clone()))
            .execute(crate::application::CreateProductInput {
                name: "Harry Potter 5".to_string(),
                price: 9.99,
                product_image: None,
            })
            .await
            .unwrap();

        let app = orders_app(repo, config.clone());

        let response = app
            .clone()
            .oneshot(
                Request::post("/")
                    .header(header::AUTHORIZATION, bearer(&config))
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(format!(
                        r#"{{"productId":"{}"}}"#,
                        product.product_id
                    )))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Order created");
        assert_eq!(body["createdOrder"]["quantity"], 1);
        let order_id = body["createdOrder"]["id"].as_str().unwrap().to_string();

        let response = app
            .oneshot(
                Request::get(format!("/{order_id}"))
                    .header(header::AUTHORIZATION, bearer(&config))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["order"]["product"]["name"], "Harry Potter 5");
        assert_eq!(body["order"]["quantity"], 1);
    }

    #[tokio::test]
    async fn test_create_order_for_missing_product_message() {
        let config = auth_config();
        let app = orders_app(MemCatalogRepository::default(), config.clone());

        let response = app
            .oneshot(
                Request::post("/")
                    .header(header::AUTHORIZATION, bearer(&config))
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"productId":"33333333-3333-3333-3333-333333333333","quantity":2}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Product not found");
    }
}
