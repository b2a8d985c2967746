//! Account Repository Implementation
//!
//! PostgreSQL implementation of the `AccountRepository` write capability.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{AccountId, AccountRepository, HashedPassword, StorageError, UserName};

/// PostgreSQL account repository.
#[derive(Clone)]
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    /// Create a new PgAccountRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
    /// Insert an account in its own transaction.
    ///
    /// Uniqueness is enforced by the `accounts.username` constraint.
    async fn create_account(
        &self,
        user_name: &UserName,
        password_hash: &HashedPassword,
    ) -> Result<AccountId, StorageError> {
        let mut tx = self.pool.begin().await.map_err(StorageError::backend)?;

        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO accounts (username, password_hash)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(user_name.as_str())
        .bind(password_hash.as_bytes())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                StorageError::DuplicateUserName
            }
            _ => StorageError::backend(e),
        })?;

        tx.commit().await.map_err(StorageError::backend)?;

        Ok(AccountId::from(id))
    }
}
