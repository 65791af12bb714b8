//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system. Note that every credential failure,
//! whatever its actual cause, renders as the same 401 body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown email, wrong password, or missing/invalid/expired token.
    /// Deliberately a single variant with a single client message.
    #[error("Auth failed")]
    AuthFailed,

    /// An account with this email already exists
    #[error("User already exists")]
    EmailTaken,

    /// Email failed validation on signup
    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    /// Password failed validation on signup
    #[error("Invalid password: {0}")]
    InvalidPassword(String),

    /// Path id is not a valid account id
    #[error("Invalid user id")]
    InvalidId,

    /// Password hashing or stored-hash parsing failed
    #[error("Password hashing failed")]
    Hashing(#[from] platform::password::PasswordHashError),

    /// Token signing failed
    #[error("Token signing failed")]
    Signing(#[from] platform::token::SignError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::AuthFailed => StatusCode::UNAUTHORIZED,
            AuthError::EmailTaken => StatusCode::CONFLICT,
            AuthError::InvalidEmail(_) | AuthError::InvalidPassword(_) | AuthError::InvalidId => {
                StatusCode::BAD_REQUEST
            }
            AuthError::Hashing(_)
            | AuthError::Signing(_)
            | AuthError::Database(_)
            | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::AuthFailed => ErrorKind::Unauthorized,
            AuthError::EmailTaken => ErrorKind::Conflict,
            AuthError::InvalidEmail(_) | AuthError::InvalidPassword(_) | AuthError::InvalidId => {
                ErrorKind::BadRequest
            }
            AuthError::Hashing(_)
            | AuthError::Signing(_)
            | AuthError::Database(_)
            | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Hashing(e) => {
                tracing::error!(error = %e, "Password hashing error");
            }
            AuthError::Signing(e) => {
                tracing::error!(error = %e, "Token signing error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::AuthFailed => {
                tracing::warn!("Authentication failed");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AuthError::AuthFailed.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthError::EmailTaken.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            AuthError::InvalidEmail("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AuthError::Internal("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_wire_messages() {
        // Stable client-visible strings from the API contract
        assert_eq!(AuthError::AuthFailed.to_string(), "Auth failed");
        assert_eq!(AuthError::EmailTaken.to_string(), "User already exists");
    }
}
