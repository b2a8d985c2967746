//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::Serialize;

use crate::application::services::AccountToken;
use crate::domain::AccountId;

/// Returned by account creation and login.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub username: String,
    pub token: String,
}

impl From<AccountToken> for TokenResponse {
    fn from(value: AccountToken) -> Self {
        Self {
            username: value.user_name.as_str().to_owned(),
            token: value.token.into_string(),
        }
    }
}

/// The authenticated caller's account.
#[derive(Debug, Serialize)]
pub struct CurrentAccountResponse {
    pub account_id: AccountId,
}
