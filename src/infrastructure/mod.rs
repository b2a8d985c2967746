//! Infrastructure Layer
//!
//! Storage implementations:
//! - PostgreSQL connection pool and migrations
//! - Repository implementations (PostgreSQL and in-memory)

pub mod database;
pub mod repositories;
