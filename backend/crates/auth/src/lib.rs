//! Auth (Accounts & Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Account entity, email value object, repository trait
//! - `application/` - Use cases (sign up, log in, delete account)
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, auth gate middleware
//!
//! ## Features
//! - Account signup/login with email + password
//! - Stateless bearer tokens (HMAC-SHA256 signed, 1 hour TTL, no revocation)
//! - Request middleware guarding protected routes
//!
//! ## Security Model
//! - Passwords hashed with bcrypt (salted, configurable cost)
//! - Every authentication failure answers an identical 401 body, so the API
//!   cannot be used as an account-enumeration oracle
//! - Duplicate emails blocked by a unique index at the store layer

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAccountRepository;
pub use presentation::middleware::{AuthGateState, AuthenticatedUser, require_bearer_auth};
pub use presentation::router::user_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
