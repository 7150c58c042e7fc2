//! HTTP test fixture
//!
//! Builds the real router on an in-memory SQLite database and serves it
//! through `axum_test::TestServer`.

use axum_extra::extract::cookie::Cookie;
use axum_test::TestServer;

use techtalk::backend::auth::password::MIN_BCRYPT_COST;
use techtalk::backend::auth::sessions::SESSION_COOKIE;
use techtalk::backend::routes::create_router;
use techtalk::backend::server::{build_state, AppState, ServerConfig};

pub const TEST_SECRET: &str = "integration-test-secret";

/// Test configuration: in-memory store, cheapest bcrypt cost
pub fn test_config() -> ServerConfig {
    ServerConfig::builder()
        .database_url("sqlite::memory:")
        .max_connections(1)
        .jwt_secret(TEST_SECRET)
        .bcrypt_cost(MIN_BCRYPT_COST)
        .template_dir(concat!(env!("CARGO_MANIFEST_DIR"), "/templates"))
        .static_dir(concat!(env!("CARGO_MANIFEST_DIR"), "/static"))
        .build()
        .expect("Failed to build test config")
}

/// Session cookie carrying `token`, for `TestRequest::add_cookie`
pub fn session(token: &str) -> Cookie<'static> {
    Cookie::new(SESSION_COOKIE, token.to_string())
}

/// Application under test
///
/// Cookies are not saved between requests; each request carries exactly the
/// session it is given.
pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
}

impl TestApp {
    pub async fn new() -> Self {
        let config = test_config();
        let state = build_state(&config)
            .await
            .expect("Failed to build application state");
        let router = create_router(state.clone(), &config.static_dir);
        let server = TestServer::new(router).expect("Failed to start test server");

        Self { server, state }
    }

    pub async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.state.db)
            .await
            .expect("Failed to count rows")
    }
}
