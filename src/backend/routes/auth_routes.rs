/**
 * Authentication Routes
 *
 * - `GET /login`, `POST /login` - Login form and credential check
 * - `GET /logout` - Clear the session cookie
 * - `GET /register`, `POST /register` - Registration form and user creation
 */

use axum::{routing::get, Router};

use crate::backend::auth::{login, login_form, logout, register, register_form};
use crate::backend::server::state::AppState;

/// Configure authentication routes
pub fn configure_auth_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/login", get(login_form).post(login))
        .route("/logout", get(logout))
        .route("/register", get(register_form).post(register))
}
