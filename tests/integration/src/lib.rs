//! Integration test utilities for the dialog bot server
//!
//! This crate provides helpers for running end-to-end tests against the
//! webhook and admin routes, backed by in-memory stores or PostgreSQL.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
