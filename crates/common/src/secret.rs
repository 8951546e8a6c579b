//! Secret types for protecting sensitive values from accidental logging.
//!
//! This module re-exports types from the [`secrecy`] crate with Soundpost-specific
//! guidance. Use these types for all sensitive values like passwords, signing
//! keys, and tokens.
//!
//! `SecretBox<T>` and `SecretString` implement `Debug` with redaction, so any
//! struct that derives `Debug` while holding a secret gets safe logging
//! behavior for free, and secrets are zeroized when dropped.
//!
//! # Example
//!
//! ```rust
//! use common::secret::SecretString;
//! use secrecy::ExposeSecret;
//!
//! #[derive(Debug)]
//! struct LoginRequest {
//!     email: String,
//!     password: SecretString,  // Safe: Debug shows "[REDACTED]"
//! }
//!
//! let req = LoginRequest {
//!     email: "alice@example.com".to_string(),
//!     password: SecretString::from("hunter2"),
//! };
//!
//! // Redacted in Debug output
//! println!("{:?}", req);
//!
//! // Access requires an explicit expose_secret() call
//! let password: &str = req.password.expose_secret();
//! ```
//!
//! # Soundpost usage guidelines
//!
//! Use `SecretString` for:
//! - User passwords in flight
//! - JWT signing secrets
//! - Database passwords and connection strings embedding them

// Re-export the main types from secrecy
pub use secrecy::{ExposeSecret, SecretBox, SecretString};
