//! Token codec: signed, time-bound claim sets.
//!
//! Tokens are symmetric HS256 JWTs signed with the process-wide secret from
//! [`Config`](crate::config::Config). Encoding is deterministic for a given
//! claim set and key; decoding verifies signature and expiry with zero
//! leeway and reports failures through [`TokenError`], which distinguishes
//! signature, structure, and expiry internally while rendering a single
//! generic message externally.

use crate::errors::AuthError;
use common::secret::{ExposeSecret, SecretString};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::instrument;

/// Maximum accepted token size in bytes.
///
/// Oversized tokens are rejected BEFORE base64 decode or signature
/// verification. Typical tokens here are 200-300 bytes; 8 KiB leaves
/// generous headroom while bounding what an unauthenticated caller can make
/// the verifier chew on.
pub const MAX_TOKEN_SIZE_BYTES: usize = 8192;

/// Token lifetime: expiry is exactly 24 hours after issuance.
pub const TOKEN_TTL_SECONDS: i64 = 86_400;

/// Token decode failures.
///
/// Variants are distinguished for logging and tests, but every variant
/// displays the same generic message so callers cannot learn which check
/// failed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    /// Token size exceeds [`MAX_TOKEN_SIZE_BYTES`].
    #[error("The token is invalid or expired")]
    TooLarge,

    /// Not a structurally valid JWT (wrong segment count, bad base64,
    /// claims that do not deserialize).
    #[error("The token is invalid or expired")]
    Malformed,

    /// Signature does not verify under the configured key.
    #[error("The token is invalid or expired")]
    Signature,

    /// The current time is at or after `exp`.
    #[error("The token is invalid or expired")]
    Expired,
}

/// Claim set carried inside a token.
///
/// `exp` is always `iat + TOKEN_TTL_SECONDS` at issuance and `admin` is
/// always true; there is no role distinction yet.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (the registered email) - redacted in Debug output.
    pub sub: String,

    /// Issued-at timestamp (Unix epoch seconds).
    pub iat: i64,

    /// Expiration timestamp (Unix epoch seconds).
    pub exp: i64,

    /// Privilege flag, always true in current scope.
    pub admin: bool,
}

impl fmt::Debug for Claims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Claims")
            .field("sub", &"[REDACTED]")
            .field("iat", &self.iat)
            .field("exp", &self.exp)
            .field("admin", &self.admin)
            .finish()
    }
}

impl Claims {
    /// Build the claim set issued at `now` (Unix seconds).
    #[must_use]
    pub fn new(subject: impl Into<String>, now: i64) -> Self {
        Self {
            sub: subject.into(),
            iat: now,
            exp: now + TOKEN_TTL_SECONDS,
            admin: true,
        }
    }
}

/// Sign a claim set into an opaque token string.
#[instrument(skip_all)]
pub fn encode_token(claims: &Claims, secret: &SecretString) -> Result<String, AuthError> {
    let encoding_key = EncodingKey::from_secret(secret.expose_secret().as_bytes());

    encode(&Header::new(Algorithm::HS256), claims, &encoding_key)
        .map_err(|e| AuthError::Crypto(format!("Token signing operation failed: {e}")))
}

/// Verify a token string and return its claim set.
///
/// Validates, in order: size, structure, signature, expiry. Zero clock
/// leeway: a token is invalid at its exact expiry instant.
#[instrument(skip_all)]
pub fn decode_token(token: &str, secret: &SecretString) -> Result<Claims, TokenError> {
    if token.len() > MAX_TOKEN_SIZE_BYTES {
        tracing::debug!(
            target: "crypto",
            token_size = token.len(),
            max_size = MAX_TOKEN_SIZE_BYTES,
            "Token rejected: size exceeds maximum allowed"
        );
        return Err(TokenError::TooLarge);
    }

    let decoding_key = DecodingKey::from_secret(secret.expose_secret().as_bytes());

    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    validation.leeway = 0;

    let token_data = decode::<Claims>(token, &decoding_key, &validation).map_err(|e| {
        tracing::debug!(target: "crypto", error = %e, "Token verification failed");
        match e.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::InvalidSignature => TokenError::Signature,
            _ => TokenError::Malformed,
        }
    })?;

    Ok(token_data.claims)
}
