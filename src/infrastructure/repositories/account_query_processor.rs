//! Account Query Processor Implementation
//!
//! PostgreSQL implementation of the `AccountQueryProcessor` read capability.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{
    AccountId, AccountQueryProcessor, HashedPassword, LoginCredential, StorageError, UserName,
};

#[derive(Debug, sqlx::FromRow)]
struct LoginCredentialRow {
    id: Uuid,
    password_hash: Vec<u8>,
}

impl LoginCredentialRow {
    fn into_credential(self) -> LoginCredential {
        LoginCredential {
            account_id: AccountId::from(self.id),
            password_hash: HashedPassword::from_bytes(self.password_hash),
        }
    }
}

/// PostgreSQL account query processor.
#[derive(Clone)]
pub struct PgAccountQueryProcessor {
    pool: PgPool,
}

impl PgAccountQueryProcessor {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountQueryProcessor for PgAccountQueryProcessor {
    async fn get_login_credential(
        &self,
        user_name: &UserName,
    ) -> Result<LoginCredential, StorageError> {
        sqlx::query_as::<_, LoginCredentialRow>(
            r#"
            SELECT id, password_hash
            FROM accounts
            WHERE username = $1
            "#,
        )
        .bind(user_name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(StorageError::backend)?
        .map(LoginCredentialRow::into_credential)
        .ok_or(StorageError::AccountNotFound)
    }
}
