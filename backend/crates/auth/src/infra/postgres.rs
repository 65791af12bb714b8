//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::id::AccountId;
use platform::password::HashedPassword;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::account::Account;
use crate::domain::email::Email;
use crate::domain::repository::AccountRepository;
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed account repository
#[derive(Clone)]
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl AccountRepository for PgAccountRepository {
    async fn find_by_email(&self, email: &Email) -> AuthResult<Vec<Account>> {
        let rows = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT
                account_id,
                email,
                password_hash,
                created_at
            FROM accounts
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(AccountRow::into_account).collect())
    }

    async fn insert(&self, account: &Account) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO accounts (
                account_id,
                email,
                password_hash,
                created_at
            ) VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(account.account_id.as_uuid())
        .bind(account.email.as_str())
        .bind(account.password_hash.as_str())
        .bind(account.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            // Unique index on email; the backstop for the signup race
            sqlx::Error::Database(db) if db.code().as_deref() == Some("23505") => {
                AuthError::EmailTaken
            }
            _ => AuthError::Database(e),
        })?;

        Ok(())
    }

    async fn delete_by_id(&self, account_id: &AccountId) -> AuthResult<u64> {
        let deleted = sqlx::query("DELETE FROM accounts WHERE account_id = $1")
            .bind(account_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted)
    }
}

// ============================================================================
// Row mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct AccountRow {
    account_id: Uuid,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl AccountRow {
    fn into_account(self) -> Account {
        Account {
            account_id: AccountId::from_uuid(self.account_id),
            email: Email::from_db(self.email),
            password_hash: HashedPassword::from_stored(self.password_hash),
            created_at: self.created_at,
        }
    }
}
