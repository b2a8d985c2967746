//! # Domain Value Objects
//!
//! Immutable, validated value types for account identity.
//!
//! ## Value Objects
//!
//! - **AccountId**: UUID handle for an account, independent of its user name
//! - **UserName**: 1-32 ASCII letters and digits
//! - **RawPassword**: plaintext password, request-scoped and zeroed on drop
//! - **HashedPassword**: bcrypt output as stored by the account repository
//!
//! Construction is fail-closed: anything that does not match the accepted
//! pattern is rejected before it reaches a service.

mod account_id;
mod password;
mod user_name;

pub use account_id::*;
pub use password::*;
pub use user_name::*;

/// Errors raised while parsing identity values at the request boundary.
///
/// Messages never echo the rejected input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("invalid user name")]
    InvalidUserName,

    #[error("invalid password")]
    InvalidPassword,

    #[error("invalid account id")]
    InvalidAccountId,
}
