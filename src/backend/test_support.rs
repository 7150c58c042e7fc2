//! Unit test fixtures
//!
//! In-memory SQLite store with migrations applied, plus an `AppState` wired to
//! it. The pool is capped at one connection because every new connection to
//! `sqlite::memory:` opens a separate, empty database.

use std::path::PathBuf;

use chrono::Duration;
use sqlx::SqlitePool;

use crate::backend::auth::password::{PasswordHasher, MIN_BCRYPT_COST};
use crate::backend::auth::sessions::SessionCodec;
use crate::backend::server::config::{connect_database, ServerConfig};
use crate::backend::server::state::AppState;
use crate::backend::views::Templates;

pub(crate) const TEST_SECRET: &str = "unit-test-secret";

pub(crate) fn template_dir() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/templates"))
}

pub(crate) fn test_config() -> ServerConfig {
    ServerConfig::builder()
        .database_url("sqlite::memory:")
        .max_connections(1)
        .jwt_secret(TEST_SECRET)
        .bcrypt_cost(MIN_BCRYPT_COST)
        .template_dir(template_dir())
        .build()
        .expect("test config is valid")
}

pub(crate) async fn memory_pool() -> SqlitePool {
    connect_database(&test_config())
        .await
        .expect("Failed to create in-memory database")
}

pub(crate) async fn test_state() -> AppState {
    AppState {
        db: memory_pool().await,
        sessions: SessionCodec::new(TEST_SECRET.as_bytes()),
        passwords: PasswordHasher::new(MIN_BCRYPT_COST),
        templates: Templates::from_dir(template_dir()),
        login_token_ttl: Duration::minutes(30),
    }
}
