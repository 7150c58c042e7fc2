/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration and the
 * creation of the database connection pool.
 *
 * # Configuration Sources
 *
 * Configuration is loaded from environment variables (a `.env` file is read
 * by the binary before this runs), with defaults suited to local development.
 * The token signing secret has no default: `JWT_SECRET` must be set.
 *
 * | Variable | Default |
 * |---|---|
 * | `DATABASE_URL` | `sqlite://techtalk.db?mode=rwc` |
 * | `DATABASE_MAX_CONNECTIONS` | `5` |
 * | `JWT_SECRET` | required |
 * | `ACCESS_TOKEN_EXPIRE_MINUTES` | `30` (at most one year) |
 * | `BCRYPT_COST` | `bcrypt::DEFAULT_COST` |
 * | `SERVER_PORT` | `3000` |
 * | `TEMPLATE_DIR` | `templates` |
 * | `STATIC_DIR` | `static` |
 */

use std::path::PathBuf;
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use thiserror::Error;

use crate::backend::auth::password::{MAX_BCRYPT_COST, MIN_BCRYPT_COST};
use crate::backend::error::BackendError;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://techtalk.db?mode=rwc";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_LOGIN_TOKEN_MINUTES: i64 = 30;
/// Longest accepted login token lifetime (one year)
pub const MAX_LOGIN_TOKEN_MINUTES: i64 = 60 * 24 * 365;
pub const DEFAULT_PORT: u16 = 3000;

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Server configuration
#[derive(Clone)]
pub struct ServerConfig {
    /// Store connection string
    pub database_url: String,
    /// Upper bound on pooled store connections
    pub max_connections: u32,
    /// HS256 signing secret for session tokens
    pub jwt_secret: String,
    /// Lifetime of the token issued at login, in minutes
    pub login_token_minutes: i64,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
    /// Listen port
    pub port: u16,
    /// Directory the HTML templates are loaded from
    pub template_dir: PathBuf,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut builder = Self::builder();

        if let Some(url) = get("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(value) = get("DATABASE_MAX_CONNECTIONS") {
            builder = builder.max_connections(parse_value("DATABASE_MAX_CONNECTIONS", value)?);
        }
        if let Some(secret) = get("JWT_SECRET") {
            builder = builder.jwt_secret(secret);
        }
        if let Some(value) = get("ACCESS_TOKEN_EXPIRE_MINUTES") {
            builder = builder.login_token_minutes(parse_value("ACCESS_TOKEN_EXPIRE_MINUTES", value)?);
        }
        if let Some(value) = get("BCRYPT_COST") {
            builder = builder.bcrypt_cost(parse_value("BCRYPT_COST", value)?);
        }
        if let Some(value) = get("SERVER_PORT") {
            builder = builder.port(parse_value("SERVER_PORT", value)?);
        }
        if let Some(dir) = get("TEMPLATE_DIR") {
            builder = builder.template_dir(dir);
        }
        if let Some(dir) = get("STATIC_DIR") {
            builder = builder.static_dir(dir);
        }

        builder.build()
    }
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("database_url", &self.database_url)
            .field("max_connections", &self.max_connections)
            .field("jwt_secret", &"<redacted>")
            .field("login_token_minutes", &self.login_token_minutes)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("port", &self.port)
            .field("template_dir", &self.template_dir)
            .field("static_dir", &self.static_dir)
            .finish()
    }
}

fn parse_value<T: FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { key, value })
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    database_url: Option<String>,
    max_connections: Option<u32>,
    jwt_secret: Option<String>,
    login_token_minutes: Option<i64>,
    bcrypt_cost: Option<u32>,
    port: Option<u16>,
    template_dir: Option<PathBuf>,
    static_dir: Option<PathBuf>,
}

impl ServerConfigBuilder {
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = Some(max);
        self
    }

    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    pub fn login_token_minutes(mut self, minutes: i64) -> Self {
        self.login_token_minutes = Some(minutes);
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn template_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.template_dir = Some(dir.into());
        self
    }

    pub fn static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }

    /// Build the configuration
    ///
    /// Fails when the signing secret is missing or a numeric setting is out
    /// of range.
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let jwt_secret = self
            .jwt_secret
            .filter(|secret| !secret.is_empty())
            .ok_or(ConfigError::MissingValue("JWT_SECRET"))?;

        let max_connections = self.max_connections.unwrap_or(DEFAULT_MAX_CONNECTIONS);
        if max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                key: "DATABASE_MAX_CONNECTIONS",
                value: max_connections.to_string(),
            });
        }

        let login_token_minutes = self.login_token_minutes.unwrap_or(DEFAULT_LOGIN_TOKEN_MINUTES);
        if !(1..=MAX_LOGIN_TOKEN_MINUTES).contains(&login_token_minutes) {
            return Err(ConfigError::InvalidValue {
                key: "ACCESS_TOKEN_EXPIRE_MINUTES",
                value: login_token_minutes.to_string(),
            });
        }

        let bcrypt_cost = self.bcrypt_cost.unwrap_or(bcrypt::DEFAULT_COST);
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: bcrypt_cost.to_string(),
            });
        }

        Ok(ServerConfig {
            database_url: self
                .database_url
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            max_connections,
            jwt_secret,
            login_token_minutes,
            bcrypt_cost,
            port: self.port.unwrap_or(DEFAULT_PORT),
            template_dir: self.template_dir.unwrap_or_else(|| PathBuf::from("templates")),
            static_dir: self.static_dir.unwrap_or_else(|| PathBuf::from("static")),
        })
    }
}

/// Open the connection pool and bring the schema up to date
///
/// This function:
/// 1. Parses the connection string (creating the database file if missing)
/// 2. Creates the connection pool
/// 3. Runs the embedded migrations, which create `users` and `articles`
///
/// # Errors
///
/// Any failure here is returned and aborts startup.
pub async fn connect_database(config: &ServerConfig) -> Result<SqlitePool, BackendError> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}
