/**
 * Server Initialization
 *
 * This module builds the application state from a `ServerConfig` and
 * assembles the router.
 *
 * # Initialization Process
 *
 * 1. Connect the SQLite pool and run embedded migrations
 * 2. Create the session codec from the configured secret
 * 3. Load the template directory
 * 4. Create the router with all routes and the static file service
 *
 * Any failure here aborts startup; there are no optional services.
 */

use axum::Router;
use chrono::Duration;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::SessionCodec;
use crate::backend::error::BackendError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{connect_database, ConfigError, ServerConfig};
use crate::backend::server::state::AppState;
use crate::backend::views::Templates;

/// Build the shared application state
///
/// # Errors
///
/// Fails when the login token lifetime is not a positive duration, or when
/// the database cannot be opened or migrated.
pub async fn build_state(config: &ServerConfig) -> Result<AppState, BackendError> {
    let login_token_ttl = Duration::try_minutes(config.login_token_minutes)
        .filter(|ttl| *ttl > Duration::zero())
        .ok_or_else(|| ConfigError::InvalidValue {
            key: "ACCESS_TOKEN_EXPIRE_MINUTES",
            value: config.login_token_minutes.to_string(),
        })?;

    let db = connect_database(config).await?;

    Ok(AppState {
        db,
        sessions: SessionCodec::new(config.jwt_secret.as_bytes()),
        passwords: PasswordHasher::new(config.bcrypt_cost),
        templates: Templates::from_dir(&config.template_dir),
        login_token_ttl,
    })
}

/// Create and configure the Axum application
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, BackendError> {
    tracing::info!("Initializing TechTalk server");

    let app_state = build_state(config).await?;
    let app = create_router(app_state, &config.static_dir);

    tracing::info!("Router configured");

    Ok(app)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::test_support::{template_dir, test_config, TEST_SECRET};
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_build_state_uses_config() {
        let config = ServerConfig::builder()
            .database_url("sqlite::memory:")
            .max_connections(1)
            .jwt_secret(TEST_SECRET)
            .login_token_minutes(5)
            .bcrypt_cost(5)
            .template_dir(template_dir())
            .build()
            .unwrap();
        let state = build_state(&config).await.unwrap();

        assert_eq!(state.login_token_ttl, Duration::minutes(5));
        assert_eq!(state.passwords.cost(), 5);
    }

    #[tokio::test]
    async fn test_build_state_rejects_unrepresentable_ttl() {
        // fields are public, so a config can skip the builder's range check
        let mut config = test_config();
        config.login_token_minutes = i64::MAX;

        let error = build_state(&config).await.err();
        assert_matches!(
            error,
            Some(BackendError::Config(ConfigError::InvalidValue { key: "ACCESS_TOKEN_EXPIRE_MINUTES", .. }))
        );
    }
}
