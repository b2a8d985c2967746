//! Request DTOs
//!
//! Data structures for API request bodies. Values are passed through as-is;
//! validation happens when the services parse them into domain types.

use std::fmt;

use serde::Deserialize;
use zeroize::Zeroizing;

/// Credentials posted to both `POST /accounts` and `POST /login`.
///
/// The password buffer is wiped when the request is dropped.
#[derive(Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: Zeroizing<String>,
}

impl fmt::Debug for CredentialsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialsRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Account creation request
pub type CreateAccountRequest = CredentialsRequest;

/// Login request
pub type LoginRequest = CredentialsRequest;
