//! # Domain Layer
//!
//! Account identity types and storage contracts.
//! It is independent of any external frameworks or infrastructure concerns.
//!
//! ## Structure
//!
//! - **entities**: The account entity and its repository traits
//! - **value_objects**: Validated identity values (AccountId, UserName, passwords)
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Invalid input is rejected at construction, never deeper
//! - Repository traits define data access contracts

pub mod entities;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use value_objects::*;
