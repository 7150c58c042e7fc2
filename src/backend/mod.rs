//! Backend Module
//!
//! This module contains all server-side code for the TechTalk site: an Axum
//! HTTP server rendering HTML pages, with user accounts and articles stored in
//! SQLite.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state and app creation
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Users, password hashing, session tokens, login/register pages
//! - **`middleware`** - Session verification extractors
//! - **`blog`** - Article storage and blog pages
//! - **`pages`** - Home, about, contact and counters pages
//! - **`views`** - Template rendering
//! - **`error`** - Backend error type and its HTML response
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Binary entry point
//! ├── server/         - Config, state and initialization
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Session verification
//! ├── blog/           - Articles
//! ├── pages/          - Informational pages
//! ├── views/          - Templates
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the SQLite pool, the session codec, the password hasher
//! settings and the template environment. All of them are cheap clonable
//! handles and none is mutated after startup, so handlers share nothing but
//! the store.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Session verification for handlers
pub mod middleware;

/// Articles
pub mod blog;

/// Informational pages
pub mod pages;

/// Template rendering
pub mod views;

/// Backend error types
pub mod error;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::BackendError;
pub use server::create_app;
