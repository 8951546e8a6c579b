//! Builders for tokens the server must reject.

use auth_service::crypto::{self, Claims, TOKEN_TTL_SECONDS};
use chrono::Utc;
use common::secret::SecretString;

/// Build a token whose expiry passed `expired_seconds_ago` seconds ago,
/// signed with the given (trusted) secret.
pub fn expired_token(
    secret: &SecretString,
    subject: &str,
    expired_seconds_ago: i64,
) -> Result<String, anyhow::Error> {
    let exp = Utc::now().timestamp() - expired_seconds_ago;
    let claims = Claims {
        sub: subject.to_string(),
        iat: exp - TOKEN_TTL_SECONDS,
        exp,
        admin: true,
    };

    Ok(crypto::encode_token(&claims, secret)?)
}

/// Build a well-formed, unexpired token signed with a key the server does
/// not trust.
pub fn foreign_key_token(subject: &str) -> Result<String, anyhow::Error> {
    let foreign_secret = SecretString::from("some-other-signing-secret");
    let claims = Claims::new(subject, Utc::now().timestamp());

    Ok(crypto::encode_token(&claims, &foreign_secret)?)
}
