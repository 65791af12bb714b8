//! User Router

use axum::{
    Router,
    routing::{delete, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::AccountRepository;
use crate::infra::postgres::PgAccountRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the user router with the PostgreSQL repository
pub fn user_router(repo: PgAccountRepository, config: Arc<AuthConfig>) -> Router {
    user_router_generic(repo, config)
}

/// Create a generic user router for any repository implementation
pub fn user_router_generic<R>(repo: R, config: Arc<AuthConfig>) -> Router
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        config,
    };

    Router::new()
        .route("/signup", post(handlers::sign_up::<R>))
        .route("/login", post(handlers::log_in::<R>))
        .route("/{userId}", delete(handlers::delete_account::<R>))
        .with_state(state)
}
