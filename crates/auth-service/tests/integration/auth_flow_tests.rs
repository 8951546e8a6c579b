//! E2E tests for the register/login flow.
//!
//! Every test spawns the real router over a fresh in-memory credential
//! store, so cases are independent and no database is required.

use auth_service::crypto::{self, TOKEN_TTL_SECONDS};
use auth_service::repositories::CredentialStore;
use auth_test_utils::TestAuthServer;
use reqwest::StatusCode;

// ============================================================================
// Registration
// ============================================================================

#[tokio::test]
async fn test_register_happy_path() -> Result<(), anyhow::Error> {
    let server = TestAuthServer::spawn().await?;

    let response = server
        .client()
        .post(format!("{}/register", server.url()))
        .basic_auth("alice@x.com", Some("pw1"))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.text().await?, "User created");

    // The pair is persisted verbatim.
    let identity = server
        .store()
        .lookup("alice@x.com")
        .await?
        .expect("identity should be stored");
    assert_eq!(identity.password, "pw1");

    Ok(())
}

#[tokio::test]
async fn test_register_duplicate_returns_conflict() -> Result<(), anyhow::Error> {
    let server = TestAuthServer::spawn().await?;

    let first = server
        .client()
        .post(format!("{}/register", server.url()))
        .basic_auth("alice@x.com", Some("pw1"))
        .send()
        .await?;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = server
        .client()
        .post(format!("{}/register", server.url()))
        .basic_auth("alice@x.com", Some("pw2"))
        .send()
        .await?;

    assert_eq!(second.status(), StatusCode::CONFLICT);
    assert_eq!(second.text().await?, "User already exists");

    // The stored secret remains the one from the first call.
    let identity = server.store().lookup("alice@x.com").await?.unwrap();
    assert_eq!(identity.password, "pw1");

    Ok(())
}

#[tokio::test]
async fn test_register_without_credentials_is_bad_request() -> Result<(), anyhow::Error> {
    let server = TestAuthServer::spawn().await?;

    let response = server
        .client()
        .post(format!("{}/register", server.url()))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text().await?, "Missing credentials");

    Ok(())
}

#[tokio::test]
async fn test_register_empty_password_is_bad_request() -> Result<(), anyhow::Error> {
    let server = TestAuthServer::spawn().await?;

    let response = server
        .client()
        .post(format!("{}/register", server.url()))
        .basic_auth("alice@x.com", Some(""))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text().await?, "Missing credentials");
    assert!(!server.store().exists("alice@x.com").await?);

    Ok(())
}

// ============================================================================
// Login
// ============================================================================

#[tokio::test]
async fn test_login_returns_signed_token() -> Result<(), anyhow::Error> {
    let server = TestAuthServer::spawn().await?;
    server.store().insert("alice@x.com", "pw1").await?;

    let response = server
        .client()
        .post(format!("{}/login", server.url()))
        .basic_auth("alice@x.com", Some("pw1"))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::OK);

    let token = response.text().await?;
    let claims = crypto::decode_token(&token, server.jwt_secret())?;

    assert_eq!(claims.sub, "alice@x.com");
    assert!(claims.admin);
    assert_eq!(claims.exp - claims.iat, TOKEN_TTL_SECONDS);

    Ok(())
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() -> Result<(), anyhow::Error> {
    let server = TestAuthServer::spawn().await?;
    server.store().insert("alice@x.com", "pw1").await?;

    let wrong_password = server
        .client()
        .post(format!("{}/login", server.url()))
        .basic_auth("alice@x.com", Some("wrong"))
        .send()
        .await?;

    let unknown_user = server
        .client()
        .post(format!("{}/login", server.url()))
        .basic_auth("mallory@x.com", Some("pw1"))
        .send()
        .await?;

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);

    // Identical challenge header and body: no identifier enumeration.
    let challenge = |r: &reqwest::Response| {
        r.headers()
            .get("www-authenticate")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    assert_eq!(challenge(&wrong_password), challenge(&unknown_user));
    assert_eq!(
        challenge(&wrong_password).as_deref(),
        Some("Basic realm=\"Login required!\"")
    );
    assert_eq!(wrong_password.text().await?, unknown_user.text().await?);

    Ok(())
}

#[tokio::test]
async fn test_login_without_credentials_is_unauthorized() -> Result<(), anyhow::Error> {
    let server = TestAuthServer::spawn().await?;

    let response = server
        .client()
        .post(format!("{}/login", server.url()))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.text().await?, "Could not verify");

    Ok(())
}

// ============================================================================
// Full scenario
// ============================================================================

/// The canonical end-to-end walk: register, re-register, login, validate,
/// then fail a login with the wrong secret.
#[tokio::test]
async fn test_register_login_validate_scenario() -> Result<(), anyhow::Error> {
    let server = TestAuthServer::spawn().await?;
    let client = server.client();

    let created = client
        .post(format!("{}/register", server.url()))
        .basic_auth("alice@x.com", Some("pw1"))
        .send()
        .await?;
    assert_eq!(created.status(), StatusCode::CREATED);

    let conflict = client
        .post(format!("{}/register", server.url()))
        .basic_auth("alice@x.com", Some("pw1"))
        .send()
        .await?;
    assert_eq!(conflict.status(), StatusCode::CONFLICT);

    let login = client
        .post(format!("{}/login", server.url()))
        .basic_auth("alice@x.com", Some("pw1"))
        .send()
        .await?;
    assert_eq!(login.status(), StatusCode::OK);
    let token = login.text().await?;

    let validate = client
        .post(format!("{}/validate", server.url()))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(validate.status(), StatusCode::OK);

    let claims: serde_json::Value = validate.json().await?;
    assert_eq!(claims["sub"].as_str(), Some("alice@x.com"));
    assert_eq!(claims["admin"].as_bool(), Some(true));

    let bad_login = client
        .post(format!("{}/login", server.url()))
        .basic_auth("alice@x.com", Some("wrong"))
        .send()
        .await?;
    assert_eq!(bad_login.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
