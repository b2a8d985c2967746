//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

use std::sync::Arc;

use axum_test::TestServer;
use chrono::Duration;
use serde_json::{json, Value};

use small_chat::application::services::{AccountServiceImpl, PasswordHasher, TokenService};
use small_chat::infrastructure::repositories::InMemoryAccountStore;
use small_chat::presentation::http::routes::create_router;
use small_chat::startup::AppState;

/// Signing key used by every test app.
pub const TEST_SECRET: &str = "test-secret-key-at-least-32-bytes!!";

/// Cheapest cost bcrypt accepts; keeps tests fast.
pub const TEST_HASH_COST: u32 = 4;

/// Test user credentials
pub struct TestUser {
    pub username: &'static str,
    pub password: &'static str,
}

pub const TEST_USER: TestUser = TestUser {
    username: "testuser",
    password: "testpass123",
};

pub fn test_hasher() -> PasswordHasher {
    PasswordHasher::new(TEST_HASH_COST).expect("valid test cost")
}

pub fn test_tokens() -> Arc<TokenService> {
    Arc::new(TokenService::new(TEST_SECRET.as_bytes(), Duration::hours(1)).expect("valid key"))
}

/// Account service over an in-memory store used for both reads and writes.
pub type InMemoryAccountService = AccountServiceImpl<InMemoryAccountStore, InMemoryAccountStore>;

pub fn in_memory_accounts(
    store: &Arc<InMemoryAccountStore>,
    tokens: &Arc<TokenService>,
) -> InMemoryAccountService {
    AccountServiceImpl::new(store.clone(), store.clone(), test_hasher(), tokens.clone())
}

/// Account service plus the store and token service behind it.
pub struct TestServices {
    pub store: Arc<InMemoryAccountStore>,
    pub accounts: InMemoryAccountService,
    pub tokens: Arc<TokenService>,
}

impl TestServices {
    pub fn new() -> Self {
        let store = Arc::new(InMemoryAccountStore::new());
        let tokens = test_tokens();

        Self {
            accounts: in_memory_accounts(&store, &tokens),
            store,
            tokens,
        }
    }
}

/// Test application over the real router and an in-memory store
pub struct TestApp {
    pub server: TestServer,
    pub store: Arc<InMemoryAccountStore>,
    pub tokens: Arc<TokenService>,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(InMemoryAccountStore::new());
        let tokens = test_tokens();
        let accounts = in_memory_accounts(&store, &tokens);
        let state = AppState::new(Arc::new(accounts), tokens.clone());

        let server = TestServer::new(create_router(state)).expect("test server");

        Self {
            server,
            store,
            tokens,
        }
    }

    /// Create an account through the API and return its token.
    pub async fn register(&self, username: &str, password: &str) -> String {
        let response = self
            .server
            .post("/accounts")
            .json(&credentials(username, password))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);

        response.json::<Value>()["token"]
            .as_str()
            .expect("token in response")
            .to_string()
    }
}

/// JSON credentials body
pub fn credentials(username: &str, password: &str) -> Value {
    json!({ "username": username, "password": password })
}
