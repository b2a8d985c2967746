//! In-memory account store.
//!
//! Implements both storage capabilities over a `DashMap` keyed by user name.
//! Backs the unit and HTTP tests, which run without a database.

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::domain::{
    AccountId, AccountQueryProcessor, AccountRepository, HashedPassword, LoginCredential,
    StorageError, UserName,
};

#[derive(Debug, Default)]
pub struct InMemoryAccountStore {
    accounts: DashMap<String, LoginCredential>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountStore {
    async fn create_account(
        &self,
        user_name: &UserName,
        password_hash: &HashedPassword,
    ) -> Result<AccountId, StorageError> {
        match self.accounts.entry(user_name.as_str().to_owned()) {
            Entry::Occupied(_) => Err(StorageError::DuplicateUserName),
            Entry::Vacant(slot) => {
                let account_id = AccountId::new_v4();
                slot.insert(LoginCredential {
                    account_id,
                    password_hash: password_hash.clone(),
                });
                Ok(account_id)
            }
        }
    }
}

#[async_trait]
impl AccountQueryProcessor for InMemoryAccountStore {
    async fn get_login_credential(
        &self,
        user_name: &UserName,
    ) -> Result<LoginCredential, StorageError> {
        self.accounts
            .get(user_name.as_str())
            .map(|entry| entry.value().clone())
            .ok_or(StorageError::AccountNotFound)
    }
}
