//! Integration tests for auzap-authz
//!
//! These tests exercise the crate through its public API.

pub mod cli_tests;
pub mod session_tests;
