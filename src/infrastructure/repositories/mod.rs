//! Repository Implementations
//!
//! Implementations of the account storage capabilities defined in the
//! domain layer.
//!
//! ## Available Implementations
//!
//! - **PgAccountRepository** - account creation against PostgreSQL
//! - **PgAccountQueryProcessor** - credential lookup against PostgreSQL
//! - **InMemoryAccountStore** - both capabilities, process-local
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use small_chat::infrastructure::repositories::{PgAccountQueryProcessor, PgAccountRepository};
//!
//! fn setup_repositories(pool: PgPool) {
//!     let accounts = PgAccountRepository::new(pool.clone());
//!     let credentials = PgAccountQueryProcessor::new(pool);
//! }
//! ```

pub mod account_query_processor;
pub mod account_repository;
pub mod in_memory;

pub use account_query_processor::PgAccountQueryProcessor;
pub use account_repository::PgAccountRepository;
pub use in_memory::InMemoryAccountStore;
