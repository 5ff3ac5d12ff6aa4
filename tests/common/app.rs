use axum_test::TestServer;

use classfolio::build_router;
use classfolio::config::Config;
use classfolio::state::AppState;

use super::fake_store::{self, FakeStore};

/// Test configuration pointed at a fake store instance
pub fn test_config(store_api_base: String) -> Config {
    Config {
        store_api_base,
        store_base_id: "appTESTBASE".to_string(),
        store_api_key: "key-test".to_string(),
        jwt_secret: "test-jwt-secret-that-is-at-least-32-characters-long".to_string(),
        jwt_expiration_hours: 24,
        host: "127.0.0.1".to_string(),
        port: 0,
        environment: "test".to_string(),
    }
}

/// Test application wrapper
pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
    pub store: FakeStore,
}

impl TestApp {
    /// Create a new test application backed by a fresh fake store
    pub async fn new() -> Self {
        let (store, base_url) = fake_store::spawn().await;

        let config = test_config(base_url);
        let state = AppState::new(config);

        let router = build_router(state.clone());
        let mut server = TestServer::new(router).expect("Failed to create test server");
        // Persist the session cookie across requests, like a browser would
        server.save_cookies();

        Self {
            server,
            state,
            store,
        }
    }
}
