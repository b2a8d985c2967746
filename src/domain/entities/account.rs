//! Account entity and storage capability traits.
//!
//! Maps to the `accounts` table:
//! - id: UUID PRIMARY KEY
//! - username: VARCHAR(32) NOT NULL UNIQUE
//! - password_hash: BYTEA NOT NULL
//! - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
//!
//! The write side (`AccountRepository`) and the read side
//! (`AccountQueryProcessor`) are separate capabilities so that the account
//! creation flow never gets read access and the login flow never gets write
//! access.

use async_trait::async_trait;

use crate::domain::value_objects::{AccountId, HashedPassword, UserName};

/// Stored credential material needed to authenticate an account.
#[derive(Debug, Clone)]
pub struct LoginCredential {
    pub account_id: AccountId,
    pub password_hash: HashedPassword,
}

/// Errors reported by storage collaborators.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("user name is already registered")]
    DuplicateUserName,

    #[error("account not found")]
    AccountNotFound,

    #[error("storage backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl StorageError {
    /// Wrap an arbitrary backend failure.
    pub fn backend<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Backend(Box::new(error))
    }
}

/// Write capability: persist new accounts.
///
/// Implementations must create the account atomically and enforce user name
/// uniqueness themselves, reporting a clash as `StorageError::DuplicateUserName`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Create an account and return its newly assigned id.
    async fn create_account(
        &self,
        user_name: &UserName,
        password_hash: &HashedPassword,
    ) -> Result<AccountId, StorageError>;
}

/// Read capability: look up login credentials.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountQueryProcessor: Send + Sync {
    /// Fetch the id and stored hash for a user name.
    ///
    /// Returns `StorageError::AccountNotFound` when no such account exists.
    async fn get_login_credential(
        &self,
        user_name: &UserName,
    ) -> Result<LoginCredential, StorageError>;
}
