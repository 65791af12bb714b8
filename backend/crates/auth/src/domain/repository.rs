//! Repository Trait
//!
//! Interface for account persistence. The store is an external collaborator
//! offering per-record atomic reads and writes; there is no multi-step
//! transaction, so signup's check-then-insert sequence is not atomic.
//! Implementation is in the infrastructure layer.

use kernel::id::AccountId;

use crate::domain::{account::Account, email::Email};
use crate::error::AuthResult;

/// Account repository trait
#[trait_variant::make(AccountRepository: Send)]
pub trait LocalAccountRepository {
    /// Find accounts by exact email match.
    ///
    /// Returns a list per the store contract; the unique email index means
    /// more than one element is unreachable in practice.
    async fn find_by_email(&self, email: &Email) -> AuthResult<Vec<Account>>;

    /// Persist a new account.
    ///
    /// A concurrent insert of the same email surfaces as
    /// [`crate::error::AuthError::EmailTaken`] via the unique index.
    async fn insert(&self, account: &Account) -> AuthResult<()>;

    /// Delete an account by id, returning the number of removed records
    /// (0 or 1). Deleting a missing id is not an error.
    async fn delete_by_id(&self, account_id: &AccountId) -> AuthResult<u64>;
}
