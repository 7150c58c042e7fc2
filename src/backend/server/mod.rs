//! Server Module
//!
//! This module contains the code that turns a `ServerConfig` into a running
//! Axum application.
//!
//! # Architecture
//!
//! - **`config`** - Environment configuration and database connection
//! - **`state`** - Application state structure and `FromRef` implementations
//! - **`init`** - State construction and app creation
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── config.rs       - ServerConfig, builder and connect_database
//! ├── state.rs        - AppState and FromRef implementations
//! └── init.rs         - build_state and create_app
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use techtalk::backend::server::{config::ServerConfig, create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use config::{ConfigError, ServerConfig};
pub use init::{build_state, create_app};
pub use state::AppState;
