//! Test utilities for the auth service.
//!
//! Provides [`TestAuthServer`] for spawning real server instances over the
//! in-memory credential store, plus token builders for expiry and key
//! mismatch scenarios.

pub mod server_harness;
pub mod token_builders;

pub use server_harness::TestAuthServer;
