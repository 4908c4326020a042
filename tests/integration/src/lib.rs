//! Integration test utilities for the account lookup
//!
//! This crate provides spy environments, fixtures, and database helpers for
//! end-to-end tests of the lookup orchestration.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
