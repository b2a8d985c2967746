//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **PasswordHasher**: bcrypt hashing and verification
//! - **TokenService**: JWT issuance and verification
//! - **AccountService**: Account registration and login

pub mod account_service;
pub mod password_hasher;
pub mod token_service;

pub use account_service::{AccountError, AccountService, AccountServiceImpl, AccountToken};
pub use password_hasher::{HashingError, PasswordHasher};
pub use token_service::{BearerToken, Claims, TokenError, TokenService, ACCOUNT_ID_CLAIM};
