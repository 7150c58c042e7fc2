//! Authentication test helpers
//!
//! Register and log in through the real HTTP routes so tests exercise the
//! same path a browser does.

use axum::http::StatusCode;

use techtalk::backend::auth::sessions::SESSION_COOKIE;

use super::app::TestApp;

/// Test user credentials
pub struct TestUser {
    pub username: String,
    pub password: String,
    /// Session token taken from the login response cookie
    pub token: String,
}

/// Register a user through `POST /register`
pub async fn register(app: &TestApp, username: &str, password: &str) {
    let email = format!("{username}@example.com");
    let response = app
        .server
        .post("/register")
        .form(&[("username", username), ("email", &email), ("password", password)])
        .await;
    assert_eq!(
        response.status_code(),
        StatusCode::OK,
        "registration failed: {}",
        response.text()
    );
}

/// Log in through `POST /login` and return the session token
pub async fn login(app: &TestApp, username: &str, password: &str) -> String {
    let response = app
        .server
        .post("/login")
        .form(&[("username", username), ("password", password)])
        .await;
    assert_eq!(
        response.status_code(),
        StatusCode::SEE_OTHER,
        "login failed: {}",
        response.text()
    );
    response.cookie(SESSION_COOKIE).value().to_string()
}

/// Register and log in a fresh user
pub async fn create_test_user(app: &TestApp, username: &str, password: &str) -> TestUser {
    register(app, username, password).await;
    let token = login(app, username, password).await;

    TestUser {
        username: username.to_string(),
        password: password.to_string(),
        token,
    }
}
