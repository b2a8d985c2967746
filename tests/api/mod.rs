//! REST API tests

mod account_tests;
mod health_tests;
