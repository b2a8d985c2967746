//! Account flow tests

mod account_flow_tests;
