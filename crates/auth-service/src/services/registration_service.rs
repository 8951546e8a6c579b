//! Registration: create a new identity in the credential store.

use crate::errors::AuthError;
use crate::repositories::CredentialStore;

/// Register a new identity.
///
/// Empty fields are rejected up front; duplicate emails surface as
/// [`AuthError::UserExists`] straight from the store's atomic insert. The
/// secret is persisted verbatim.
pub async fn register_identity(
    store: &dyn CredentialStore,
    email: &str,
    password: &str,
) -> Result<(), AuthError> {
    if email.is_empty() || password.is_empty() {
        return Err(AuthError::MissingCredentials);
    }

    store.insert(email, password).await
}
