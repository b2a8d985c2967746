//! Account Service
//!
//! Account creation and login. Creation only writes through
//! `AccountRepository`; login only reads through `AccountQueryProcessor`.
//! Both validate their input first, keep the plaintext password only for the
//! duration of the call, and finish by issuing a fresh bearer token.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    AccountQueryProcessor, AccountRepository, IdentityError, RawPassword, StorageError, UserName,
};

use super::password_hasher::{HashingError, PasswordHasher};
use super::token_service::{BearerToken, TokenError, TokenService};

/// Account service trait for dependency injection
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Register a new account and issue its first token
    async fn create_account(
        &self,
        user_name: &str,
        password: &str,
    ) -> Result<AccountToken, AccountError>;

    /// Check credentials and issue a new token
    async fn login(&self, user_name: &str, password: &str) -> Result<AccountToken, AccountError>;
}

/// Result of a successful account creation or login.
///
/// The account id is deliberately not exposed; it only travels inside the token.
#[derive(Debug, Clone)]
pub struct AccountToken {
    pub user_name: UserName,
    pub token: BearerToken,
}

/// Account flow errors
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] IdentityError),

    #[error("Password hashing failed: {0}")]
    HashingFailure(#[from] HashingError),

    #[error("User name already registered")]
    UserNameAlreadyRegistered,

    #[error("Account not found")]
    AccountNotFound,

    #[error("Password does not match")]
    PasswordMismatch,

    #[error("Storage error: {0}")]
    Storage(#[source] StorageError),

    #[error("Token issuance failed: {0}")]
    TokenIssuance(#[from] TokenError),
}

impl AccountError {
    /// Whether this is one of the outcomes that must look identical to clients.
    pub fn is_authentication_failure(&self) -> bool {
        matches!(self, Self::AccountNotFound | Self::PasswordMismatch)
    }
}

/// AccountService implementation
pub struct AccountServiceImpl<R, Q>
where
    R: AccountRepository,
    Q: AccountQueryProcessor,
{
    accounts: Arc<R>,
    credentials: Arc<Q>,
    hasher: PasswordHasher,
    tokens: Arc<TokenService>,
}

impl<R, Q> AccountServiceImpl<R, Q>
where
    R: AccountRepository,
    Q: AccountQueryProcessor,
{
    /// Create a new AccountServiceImpl
    pub fn new(
        accounts: Arc<R>,
        credentials: Arc<Q>,
        hasher: PasswordHasher,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            accounts,
            credentials,
            hasher,
            tokens,
        }
    }
}

#[async_trait]
impl<R, Q> AccountService for AccountServiceImpl<R, Q>
where
    R: AccountRepository,
    Q: AccountQueryProcessor,
{
    /// Nothing is persisted unless both inputs validate and hashing succeeds.
    /// A duplicate user name is reported by the repository; no compensating
    /// action is needed because nothing was committed.
    #[tracing::instrument(name = "create_account", skip_all, fields(user_name = tracing::field::Empty))]
    async fn create_account(
        &self,
        user_name: &str,
        password: &str,
    ) -> Result<AccountToken, AccountError> {
        let user_name = UserName::parse(user_name)?;
        let password = RawPassword::parse(password.as_bytes())?;
        tracing::Span::current().record("user_name", user_name.as_str());

        let password_hash = self.hasher.hash_blocking(password).await?;

        let account_id = self
            .accounts
            .create_account(&user_name, &password_hash)
            .await
            .map_err(|e| match e {
                StorageError::DuplicateUserName => AccountError::UserNameAlreadyRegistered,
                e => AccountError::Storage(e),
            })?;

        let token = self.tokens.issue(&account_id)?;

        tracing::info!(%account_id, "Account created");

        Ok(AccountToken { user_name, token })
    }

    /// An unknown user name still costs one full bcrypt verification, so it
    /// takes as long as a wrong password.
    #[tracing::instrument(name = "login", skip_all, fields(user_name = tracing::field::Empty))]
    async fn login(&self, user_name: &str, password: &str) -> Result<AccountToken, AccountError> {
        let user_name = UserName::parse(user_name)?;
        let password = RawPassword::parse(password.as_bytes())?;
        tracing::Span::current().record("user_name", user_name.as_str());

        let credential = match self.credentials.get_login_credential(&user_name).await {
            Ok(credential) => credential,
            Err(StorageError::AccountNotFound) => {
                self.hasher.verify_dummy_blocking(password).await?;
                tracing::debug!("Login rejected: account not found");
                return Err(AccountError::AccountNotFound);
            }
            Err(e) => return Err(AccountError::Storage(e)),
        };

        if !self
            .hasher
            .verify_blocking(credential.password_hash, password)
            .await?
        {
            tracing::debug!(account_id = %credential.account_id, "Login rejected: password mismatch");
            return Err(AccountError::PasswordMismatch);
        }

        let token = self.tokens.issue(&credential.account_id)?;

        tracing::info!(account_id = %credential.account_id, "Login succeeded");

        Ok(AccountToken { user_name, token })
    }
}
