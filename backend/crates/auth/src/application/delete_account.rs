//! Delete Account Use Case
//!
//! Removes the account matching the id. Removing zero records is not
//! distinguished from removing one at the API boundary; both answer the
//! same success shape.

use std::sync::Arc;

use kernel::id::AccountId;

use crate::domain::repository::AccountRepository;
use crate::error::AuthResult;

/// Delete account use case
pub struct DeleteAccountUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteAccountUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, account_id: AccountId) -> AuthResult<()> {
        let deleted = self.repo.delete_by_id(&account_id).await?;

        if deleted == 0 {
            tracing::debug!(account_id = %account_id, "Delete matched no account");
        } else {
            tracing::info!(account_id = %account_id, "Account removed");
        }

        Ok(())
    }
}
