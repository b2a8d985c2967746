//! Application Layer
//!
//! Use-case services and the DTOs exchanged with the presentation layer.

pub mod dto;
pub mod services;
