//! Test server harness for E2E testing
//!
//! Provides TestAuthServer for spawning real auth server instances in
//! tests. The server runs the production router over the in-memory
//! credential store, so tests are hermetic: no database is required.

use auth_service::config::Config;
use auth_service::handlers::auth_handler::AppState;
use auth_service::repositories::{CredentialStore, InMemoryCredentialStore};
use auth_service::routes;
use common::secret::SecretString;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Signing secret every harness instance is configured with.
pub const TEST_JWT_SECRET: &str = "test-signing-secret";

/// Test harness for spawning the auth server in E2E tests
///
/// # Example
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_login_flow() -> Result<(), anyhow::Error> {
///     let server = TestAuthServer::spawn().await?;
///
///     let response = server
///         .client()
///         .post(format!("{}/login", server.url()))
///         .basic_auth("alice@example.com", Some("pw1"))
///         .send()
///         .await?;
///
///     assert_eq!(response.status(), 401);
///     Ok(())
/// }
/// ```
pub struct TestAuthServer {
    addr: SocketAddr,
    client: reqwest::Client,
    store: Arc<InMemoryCredentialStore>,
    config: Config,
    _handle: JoinHandle<()>,
}

impl TestAuthServer {
    /// Spawn a new test server instance
    ///
    /// The server will:
    /// - Bind to a random available port (127.0.0.1:0)
    /// - Serve the production routes over a fresh in-memory store
    pub async fn spawn() -> Result<Self, anyhow::Error> {
        let config = test_config();
        let store = Arc::new(InMemoryCredentialStore::new());

        let shared: Arc<dyn CredentialStore> = store.clone();
        let state = Arc::new(AppState {
            store: shared,
            config: config.clone(),
        });

        // Build routes using the service's real route builder
        let app = routes::build_routes(state);

        // Bind to random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .map_err(|e| anyhow::anyhow!("Failed to bind test server: {}", e))?;

        let addr = listener
            .local_addr()
            .map_err(|e| anyhow::anyhow!("Failed to get local address: {}", e))?;

        // Spawn server in background
        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("Test server error: {}", e);
            }
        });

        Ok(Self {
            addr,
            client: reqwest::Client::new(),
            store,
            config,
            _handle: handle,
        })
    }

    /// Get the base URL of the test server
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Get the socket address
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Get the shared HTTP client
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Get reference to the server configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the signing secret the server verifies tokens with
    pub fn jwt_secret(&self) -> &SecretString {
        &self.config.jwt_secret
    }

    /// Get direct access to the backing store, for seeding and assertions
    pub fn store(&self) -> &InMemoryCredentialStore {
        &self.store
    }
}

impl Drop for TestAuthServer {
    fn drop(&mut self) {
        // Explicitly abort the HTTP server task so the port is released as
        // soon as the test completes.
        self._handle.abort();
    }
}

/// Harness configuration: the database options are placeholders because the
/// harness never opens a connection; the store is in-memory.
fn test_config() -> Config {
    Config {
        database_host: String::new(),
        database_name: String::new(),
        database_user: String::new(),
        database_password: SecretString::from(""),
        database_port: 5432,
        auth_table: "auth_user".to_string(),
        jwt_secret: SecretString::from(TEST_JWT_SECRET),
        bind_address: "127.0.0.1:0".to_string(),
    }
}
