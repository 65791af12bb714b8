//! Sign Up Use Case
//!
//! Creates a new account: uniqueness check, hash, persist.
//!
//! The check-then-insert sequence is not atomic. Two concurrent signups with
//! the same email can both pass the existence check; the unique index on the
//! store turns the losing insert into [`AuthError::EmailTaken`], so the race
//! cannot produce a duplicate account.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::domain::account::Account;
use crate::domain::email::Email;
use crate::domain::repository::AccountRepository;
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub email: String,
    pub password: String,
}

/// Sign up output (never includes the hash)
#[derive(Debug)]
pub struct SignUpOutput {
    pub account_id: String,
    pub email: String,
}

/// Sign up use case
pub struct SignUpUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> SignUpUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        let email =
            Email::new(input.email).map_err(|e| AuthError::InvalidEmail(e.message().to_string()))?;

        let password = ClearTextPassword::new(input.password)
            .map_err(|e| AuthError::InvalidPassword(e.to_string()))?;

        // Existence check; the unique index is the backstop for the race
        if !self.repo.find_by_email(&email).await?.is_empty() {
            return Err(AuthError::EmailTaken);
        }

        // bcrypt is CPU-bound; run it off the I/O workers
        let cost = self.config.bcrypt_cost;
        let password_hash = tokio::task::spawn_blocking(move || password.hash(cost))
            .await
            .map_err(|e| AuthError::Internal(e.to_string()))??;

        let account = Account::new(email, password_hash);
        self.repo.insert(&account).await?;

        tracing::info!(
            account_id = %account.account_id,
            email = %account.email,
            "Account created"
        );

        Ok(SignUpOutput {
            account_id: account.account_id.to_string(),
            email: account.email.to_string(),
        })
    }
}
