//! Authentication Gate
//!
//! Middleware guarding protected routes. Extracts the bearer credential from
//! the `Authorization` header, verifies it, and attaches the resolved subject
//! to the request extensions for downstream handlers.
//!
//! Missing, malformed, expired, and badly-signed tokens all answer the exact
//! same 401 body; the verification failure taxonomy stays in the logs.

use axum::Json;
use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, Request, StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use platform::token;

use crate::application::config::AuthConfig;
use crate::presentation::dto::MessageResponse;

/// Gate state; holds only configuration, never touches the store
#[derive(Clone)]
pub struct AuthGateState {
    pub config: Arc<AuthConfig>,
}

/// Subject resolved from a verified token, stored in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub account_id: String,
    pub email: String,
}

/// Middleware that requires a valid bearer token
pub async fn require_bearer_auth(
    State(state): State<AuthGateState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let Some(token) = bearer_token(req.headers()) else {
        tracing::debug!("Missing or malformed Authorization header");
        return Err(auth_failed());
    };

    match token::verify(token, &state.config.token_secret) {
        Ok(claims) => {
            tracing::debug!(account_id = %claims.sub, "Bearer token accepted");
            req.extensions_mut().insert(AuthenticatedUser {
                account_id: claims.sub,
                email: claims.email,
            });
            Ok(next.run(req).await)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Rejected bearer token");
            Err(auth_failed())
        }
    }
}

/// Extract the token from `Authorization: Bearer <token>`
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// The one 401 body every auth failure collapses into
fn auth_failed() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(MessageResponse {
            message: "Auth failed",
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::AUTHORIZATION;
    use axum::middleware::from_fn_with_state;
    use axum::routing::get;
    use axum::{Extension, Router};
    use chrono::Utc;
    use platform::token::Claims;
    use std::time::Duration;
    use tower::ServiceExt;

    const SECRET: &[u8] = b"gate-test-secret";

    fn app() -> Router {
        let state = AuthGateState {
            config: Arc::new(AuthConfig::new(SECRET.to_vec())),
        };
        Router::new()
            .route(
                "/protected",
                get(|Extension(user): Extension<AuthenticatedUser>| async move { user.email }),
            )
            .route_layer(from_fn_with_state(state, require_bearer_auth))
    }

    fn request(authorization: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/protected");
        if let Some(value) = authorization {
            builder = builder.header(AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    fn valid_token() -> String {
        let claims = Claims::with_ttl("u1", "a@b.com", Duration::from_secs(3600));
        token::sign(&claims, SECRET).unwrap()
    }

    #[tokio::test]
    async fn test_valid_token_reaches_handler_with_subject() {
        let token = valid_token();
        let response = app()
            .oneshot(request(Some(&format!("Bearer {token}"))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"a@b.com");
    }

    #[tokio::test]
    async fn test_missing_header_is_401() {
        let response = app().oneshot(request(None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_non_bearer_scheme_is_401() {
        let response = app()
            .oneshot(request(Some("Basic dXNlcjpwdw==")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_expired_token_is_401_with_same_body_as_missing() {
        let expired = Claims {
            sub: "u1".to_string(),
            email: "a@b.com".to_string(),
            exp: Utc::now().timestamp() - 60,
        };
        let token = token::sign(&expired, SECRET).unwrap();

        let expired_response = app()
            .oneshot(request(Some(&format!("Bearer {token}"))))
            .await
            .unwrap();
        let missing_response = app().oneshot(request(None)).await.unwrap();

        assert_eq!(expired_response.status(), StatusCode::UNAUTHORIZED);

        // Failure taxonomy must not leak: identical bodies
        let expired_body = axum::body::to_bytes(expired_response.into_body(), usize::MAX)
            .await
            .unwrap();
        let missing_body = axum::body::to_bytes(missing_response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(expired_body, missing_body);
        assert_eq!(&expired_body[..], br#"{"message":"Auth failed"}"#);
    }

    #[tokio::test]
    async fn test_wrong_secret_token_is_401() {
        let claims = Claims::with_ttl("u1", "a@b.com", Duration::from_secs(3600));
        let token = token::sign(&claims, b"some other secret").unwrap();

        let response = app()
            .oneshot(request(Some(&format!("Bearer {token}"))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_bearer_token_extraction() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);

        headers.insert(AUTHORIZATION, "Bearer abc.def.ghi".parse().unwrap());
        assert_eq!(bearer_token(&headers), Some("abc.def.ghi"));

        headers.insert(AUTHORIZATION, "bearer abc".parse().unwrap());
        assert_eq!(bearer_token(&headers), None); // scheme is case-sensitive

        headers.insert(AUTHORIZATION, "abc.def.ghi".parse().unwrap());
        assert_eq!(bearer_token(&headers), None);
    }
}
