use crate::crypto::TokenError;
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Challenge sent with every 401 so basic-auth clients re-prompt.
const CHALLENGE: &str = "Basic realm=\"Login required!\"";

#[derive(Debug, Error)]
pub enum AuthError {
    /// Credential store failure. The detail is logged server-side and never
    /// reaches the caller.
    #[error("Database error: {0}")]
    Database(String),

    /// Signing failure. Same handling as store failures.
    #[error("Cryptographic error: {0}")]
    Crypto(String),

    /// Basic-auth carrier absent or a field empty (registration only).
    #[error("Missing credentials")]
    MissingCredentials,

    /// Unknown identity or mismatched secret. The two cases are
    /// deliberately indistinguishable.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Registration conflict on an already-present identifier.
    #[error("User already exists")]
    UserExists,

    /// No bearer token supplied on validate.
    #[error("Missing bearer token")]
    MissingToken,

    /// Token decode failure; internally tagged, externally uniform.
    #[error("Invalid token")]
    InvalidToken(#[from] TokenError),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            AuthError::Database(detail) => {
                tracing::error!(error = %detail, "Credential store failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
            AuthError::Crypto(detail) => {
                tracing::error!(error = %detail, "Cryptographic failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
            AuthError::MissingCredentials => {
                (StatusCode::BAD_REQUEST, "Missing credentials").into_response()
            }
            AuthError::UserExists => (StatusCode::CONFLICT, "User already exists").into_response(),
            AuthError::InvalidCredentials
            | AuthError::MissingToken
            | AuthError::InvalidToken(_) => (
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, CHALLENGE)],
                "Could not verify",
            )
                .into_response(),
        }
    }
}
