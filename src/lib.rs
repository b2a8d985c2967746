//! # Small Chat Library
//!
//! Account identity and authentication for a small chat backend:
//! - Validated user names and passwords
//! - bcrypt password hashing
//! - Stateless JWT bearer tokens
//! - Account creation and login over PostgreSQL
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Identity value objects and storage capability traits
//! - **Application Layer**: Hashing, token and account services; DTOs
//! - **Infrastructure Layer**: PostgreSQL and in-memory account storage
//! - **Presentation Layer**: HTTP handlers and auth middleware
//!
//! ## Module Structure
//!
//! ```text
//! small_chat/
//! +-- config/         Configuration management
//! +-- domain/         Value objects and repository traits
//! +-- application/    Services and DTOs
//! +-- infrastructure/ Database and repository implementations
//! +-- presentation/   HTTP routes and middleware
//! +-- shared/         Common utilities (errors)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
