//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;

use kernel::id::AccountId;

use crate::application::config::AuthConfig;
use crate::application::{
    DeleteAccountUseCase, LogInInput, LogInUseCase, SignUpInput, SignUpUseCase,
};
use crate::domain::repository::AccountRepository;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    LogInRequest, LogInResponse, MessageResponse, SignUpRequest, SignUpResponse, UserData,
};

/// Shared state for account handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /user/signup
pub async fn sign_up<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<SignUpRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(SignUpInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SignUpResponse {
            message: "User created",
            user_data: UserData {
                id: output.account_id,
                email: output.email,
            },
        }),
    ))
}

// ============================================================================
// Log In
// ============================================================================

/// POST /user/login
pub async fn log_in<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LogInRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let use_case = LogInUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(LogInInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(LogInResponse {
            message: "Auth successful",
            token: output.token,
            user_data: UserData {
                id: output.account_id,
                email: output.email,
            },
        }),
    ))
}

// ============================================================================
// Delete
// ============================================================================

/// DELETE /user/{userId}
///
/// Answers the same success body whether or not the id matched a record.
pub async fn delete_account<R>(
    State(state): State<AuthAppState<R>>,
    Path(user_id): Path<String>,
) -> AuthResult<impl IntoResponse>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let account_id: AccountId = user_id.parse().map_err(|_| AuthError::InvalidId)?;

    DeleteAccountUseCase::new(state.repo.clone())
        .execute(account_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse {
            message: "User removed",
        }),
    ))
}
