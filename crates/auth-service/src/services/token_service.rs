//! Token issuance and validation over the credential store and token codec.

use crate::crypto::{self, Claims};
use crate::errors::AuthError;
use crate::repositories::CredentialStore;
use chrono::Utc;
use common::secret::SecretString;

/// Issue a signed token for a matching (email, password) pair.
///
/// Unknown email and mismatched password collapse into the same
/// [`AuthError::InvalidCredentials`] so callers cannot probe which emails
/// are registered. No side effects beyond the store read.
pub async fn issue_token(
    store: &dyn CredentialStore,
    jwt_secret: &SecretString,
    email: &str,
    password: &str,
) -> Result<String, AuthError> {
    let Some(identity) = store.lookup(email).await? else {
        return Err(AuthError::InvalidCredentials);
    };

    if identity.password != password {
        return Err(AuthError::InvalidCredentials);
    }

    let claims = Claims::new(email, Utc::now().timestamp());
    crypto::encode_token(&claims, jwt_secret)
}

/// Validate a presented token and return its claim set verbatim.
pub fn validate_token(jwt_secret: &SecretString, token: &str) -> Result<Claims, AuthError> {
    Ok(crypto::decode_token(token, jwt_secret)?)
}
