//! # Domain Entities
//!
//! Core domain entities and the repository traits used to persist them.
//!
//! ## Entities
//!
//! - **Account**: a registered user, identified by `AccountId`, authenticated
//!   by user name and password
//!
//! ## Repository Traits
//!
//! Storage is reached only through capability traits defined here and
//! implemented in the infrastructure layer, following the dependency
//! inversion principle.

mod account;

pub use account::{AccountQueryProcessor, AccountRepository, LoginCredential, StorageError};

#[cfg(test)]
pub use account::{MockAccountQueryProcessor, MockAccountRepository};
