/**
 * Backend Error Types
 *
 * This module defines the error type returned by every fallible handler.
 *
 * # Error Categories
 *
 * ## Request Errors
 *
 * Request errors are part of normal site behaviour and carry a status code
 * the visitor is meant to see:
 * - `Unauthorized` - a protected action without a valid session
 * - `NotFound` - an article id that is not in the store
 *
 * ## Infrastructure Errors
 *
 * Infrastructure errors wrap failures of the external collaborators (store,
 * template engine, hashing, token signing, configuration). They are never
 * handled locally and always surface as 500.
 *
 * Validation failures such as bad credentials or a taken username are not
 * errors at all: handlers render them inline.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::server::config::ConfigError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use techtalk::backend::error::BackendError;
///
/// let err = BackendError::not_found("Article not found");
/// assert_eq!(err.status_code(), axum::http::StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Missing, invalid or expired session on a protected route
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// Human-readable error message
        message: String,
    },

    /// Requested resource does not exist
    #[error("Not found: {message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// Store query failed
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failed at startup
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Template missing or failed to render
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    /// bcrypt hashing or verification failed
    #[error("Password hash error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// Session token could not be signed
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Invalid server configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Anything else that is not the visitor's fault
    #[error("Internal error: {message}")]
    Internal {
        /// Human-readable error message
        message: String,
    },
}

impl BackendError {
    /// Create an unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Create a not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Unauthorized` - 401 Unauthorized
    /// - `NotFound` - 404 Not Found
    /// - everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Database(_)
            | Self::Migration(_)
            | Self::Template(_)
            | Self::PasswordHash(_)
            | Self::Token(_)
            | Self::Config(_)
            | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message shown to the visitor
    ///
    /// Server-side failures get a generic message; their details only go to
    /// the log.
    pub fn message(&self) -> String {
        match self {
            Self::Unauthorized { message } | Self::NotFound { message } => message.clone(),
            _ => "Internal Server Error".to_string(),
        }
    }
}
