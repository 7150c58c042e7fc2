/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` holds only cheap, clonable handles:
 * - the SQLite connection pool
 * - the session token codec (keys behind an `Arc`)
 * - the password hasher settings
 * - the template environment (behind an `Arc`)
 *
 * Nothing in it is mutated after startup, so requests never coordinate with
 * each other through it. Each store call checks a connection out of the pool
 * and returns it when the query future completes or is dropped.
 *
 * # Example
 *
 * ```rust,no_run
 * use techtalk::backend::server::state::AppState;
 * use axum::extract::State;
 *
 * async fn handler(State(state): State<AppState>) {
 *     let _pool = &state.db;
 * }
 * ```
 */

use axum::extract::FromRef;
use chrono::Duration;
use sqlx::SqlitePool;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::SessionCodec;
use crate::backend::views::Templates;

/// Application state shared by every request handler
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,

    /// Session token codec
    pub sessions: SessionCodec,

    /// Password hashing adapter
    pub passwords: PasswordHasher,

    /// HTML template environment
    pub templates: Templates,

    /// Lifetime of the token issued on login
    pub login_token_ttl: Duration,
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db.clone()
    }
}

impl FromRef<AppState> for SessionCodec {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.sessions.clone()
    }
}
