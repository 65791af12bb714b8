//! Account Entity
//!
//! A registered user account. Created on signup, never mutated afterwards,
//! removed entirely on delete (no soft-delete).

use chrono::{DateTime, Utc};
use kernel::id::AccountId;
use platform::password::HashedPassword;

use crate::domain::email::Email;

/// Account entity
#[derive(Debug, Clone)]
pub struct Account {
    /// System-generated opaque identifier (immutable)
    pub account_id: AccountId,
    /// Unique email, the lookup key for login and signup checks
    pub email: Email,
    /// bcrypt hash; the plaintext is never stored
    pub password_hash: HashedPassword,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account with a fresh identifier
    pub fn new(email: Email, password_hash: HashedPassword) -> Self {
        Self {
            account_id: AccountId::new(),
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::password::ClearTextPassword;

    #[test]
    fn test_new_account_gets_fresh_id() {
        let hash = ClearTextPassword::new("some password".to_string())
            .unwrap()
            .hash(4)
            .unwrap();
        let a = Account::new(Email::new("a@b.com").unwrap(), hash.clone());
        let b = Account::new(Email::new("a@b.com").unwrap(), hash);
        assert_ne!(a.account_id, b.account_id);
    }
}
