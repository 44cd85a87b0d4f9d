//! Integration test utilities for the memo server
//!
//! This crate provides helpers for running end-to-end tests against
//! the reaction REST API.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
