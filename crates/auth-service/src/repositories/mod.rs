//! Repository layer for the auth service.
//!
//! The credential store is the only persistent state in the system. It is
//! consumed through the [`CredentialStore`] trait so handlers and services
//! stay agnostic of the backend; production runs on Postgres, tests on the
//! in-memory reference backend.

pub mod credentials;

pub use credentials::{CredentialStore, Identity, InMemoryCredentialStore, PgCredentialStore};
