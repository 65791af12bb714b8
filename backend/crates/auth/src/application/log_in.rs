//! Log In Use Case
//!
//! Authenticates an account and issues a signed bearer token.
//!
//! Unknown email, malformed email, and wrong password all produce the same
//! [`AuthError::AuthFailed`], so response timing and shape give no account
//! enumeration signal beyond the unavoidable hash-computation difference.

use std::sync::Arc;

use platform::password::ClearTextPassword;
use platform::token::{self, Claims};

use crate::application::config::AuthConfig;
use crate::domain::email::Email;
use crate::domain::repository::AccountRepository;
use crate::error::{AuthError, AuthResult};

/// Log in input
pub struct LogInInput {
    pub email: String,
    pub password: String,
}

/// Log in output
#[derive(Debug)]
pub struct LogInOutput {
    /// Signed bearer token, valid for the configured TTL
    pub token: String,
    pub account_id: String,
    pub email: String,
}

/// Log in use case
pub struct LogInUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> LogInUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: LogInInput) -> AuthResult<LogInOutput> {
        let email = Email::new(input.email).map_err(|_| AuthError::AuthFailed)?;

        // First match wins; the unique email index makes additional matches
        // unreachable, this is not relied upon for correctness
        let account = self
            .repo
            .find_by_email(&email)
            .await?
            .into_iter()
            .next()
            .ok_or(AuthError::AuthFailed)?;

        let password = ClearTextPassword::new(input.password).map_err(|_| AuthError::AuthFailed)?;

        // bcrypt is CPU-bound; run it off the I/O workers
        let hash = account.password_hash.clone();
        let password_valid = tokio::task::spawn_blocking(move || hash.verify(&password))
            .await
            .map_err(|e| AuthError::Internal(e.to_string()))??;

        if !password_valid {
            return Err(AuthError::AuthFailed);
        }

        let claims = Claims::with_ttl(
            account.account_id.to_string(),
            account.email.to_string(),
            self.config.token_ttl,
        );
        let token = token::sign(&claims, &self.config.token_secret)?;

        tracing::info!(account_id = %account.account_id, "Account logged in");

        Ok(LogInOutput {
            token,
            account_id: account.account_id.to_string(),
            email: account.email.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::MemAccountRepository;
    use crate::application::{SignUpInput, SignUpUseCase};

    const SECRET: &[u8] = b"login-test-secret";

    async fn repo_with_account() -> (Arc<MemAccountRepository>, Arc<AuthConfig>) {
        let repo = Arc::new(MemAccountRepository::default());
        let mut config = AuthConfig::new(SECRET.to_vec());
        config.bcrypt_cost = 4;
        let config = Arc::new(config);

        SignUpUseCase::new(repo.clone(), config.clone())
            .execute(SignUpInput {
                email: "a@b.com".to_string(),
                password: "hunter22".to_string(),
            })
            .await
            .unwrap();

        (repo, config)
    }

    #[tokio::test]
    async fn test_login_issues_verifiable_token() {
        let (repo, config) = repo_with_account().await;
        let output = LogInUseCase::new(repo, config.clone())
            .execute(LogInInput {
                email: "a@b.com".to_string(),
                password: "hunter22".to_string(),
            })
            .await
            .unwrap();

        let claims = token::verify(&output.token, &config.token_secret).unwrap();
        assert_eq!(claims.sub, output.account_id);
        assert_eq!(claims.email, "a@b.com");
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_email_look_identical() {
        let (repo, config) = repo_with_account().await;
        let uc = LogInUseCase::new(repo, config);

        let wrong_password = uc
            .execute(LogInInput {
                email: "a@b.com".to_string(),
                password: "not the password".to_string(),
            })
            .await
            .unwrap_err();

        let unknown_email = uc
            .execute(LogInInput {
                email: "nobody@b.com".to_string(),
                password: "hunter22".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, AuthError::AuthFailed));
        assert!(matches!(unknown_email, AuthError::AuthFailed));
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    }

    #[tokio::test]
    async fn test_malformed_email_is_auth_failed_not_validation() {
        let (repo, config) = repo_with_account().await;
        let err = LogInUseCase::new(repo, config)
            .execute(LogInInput {
                email: "garbage".to_string(),
                password: "hunter22".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::AuthFailed));
    }

    #[tokio::test]
    async fn test_empty_secret_is_signing_error() {
        let repo = Arc::new(MemAccountRepository::default());
        let mut config = AuthConfig::new(Vec::new());
        config.bcrypt_cost = 4;
        let config = Arc::new(config);

        SignUpUseCase::new(repo.clone(), config.clone())
            .execute(SignUpInput {
                email: "a@b.com".to_string(),
                password: "hunter22".to_string(),
            })
            .await
            .unwrap();

        let err = LogInUseCase::new(repo, config)
            .execute(LogInInput {
                email: "a@b.com".to_string(),
                password: "hunter22".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AuthError::Signing(token::SignError::EmptySecret)
        ));
    }
}
