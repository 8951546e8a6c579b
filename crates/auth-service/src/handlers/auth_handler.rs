use crate::config::Config;
use crate::crypto::Claims;
use crate::errors::AuthError;
use crate::repositories::CredentialStore;
use crate::services::{registration_service, token_service};
use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    Json,
};
use base64::{engine::general_purpose, Engine as _};
use std::sync::Arc;

/// Application state shared across handlers
pub struct AppState {
    pub store: Arc<dyn CredentialStore>,
    pub config: Config,
}

/// Handle registration
///
/// POST /register
///
/// Credentials arrive in the HTTP Basic authorization header. A missing or
/// unparseable carrier is a 400; a duplicate email a 409.
pub async fn handle_register(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<(StatusCode, &'static str), AuthError> {
    let (email, password) = basic_credentials(&headers).ok_or(AuthError::MissingCredentials)?;

    registration_service::register_identity(state.store.as_ref(), &email, &password).await?;

    Ok((StatusCode::CREATED, "User created"))
}

/// Handle login
///
/// POST /login
///
/// On a credential match the response body is the signed token string. Any
/// failure, including a missing carrier, is the uniform 401 challenge.
pub async fn handle_login(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<String, AuthError> {
    let (email, password) = basic_credentials(&headers).ok_or(AuthError::InvalidCredentials)?;

    token_service::issue_token(
        state.store.as_ref(),
        &state.config.jwt_secret,
        &email,
        &password,
    )
    .await
}

/// Handle token validation
///
/// POST /validate
///
/// Expects `Authorization: Bearer <token>` and returns the decoded claim
/// set verbatim on success.
pub async fn handle_validate(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Claims>, AuthError> {
    let token = bearer_token(&headers).ok_or(AuthError::MissingToken)?;

    let claims = token_service::validate_token(&state.config.jwt_secret, token)?;

    Ok(Json(claims))
}

/// Extract (email, password) from a Basic authorization header
fn basic_credentials(headers: &HeaderMap) -> Option<(String, String)> {
    let auth_str = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let encoded = auth_str.strip_prefix("Basic ")?;

    let decoded = general_purpose::STANDARD.decode(encoded).ok()?;
    let credentials = String::from_utf8(decoded).ok()?;

    let (email, password) = credentials.split_once(':')?;
    Some((email.to_string(), password.to_string()))
}

/// Extract the token from a Bearer authorization header
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
