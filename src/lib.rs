//! TechTalk - Main Library
//!
//! TechTalk is a server-rendered blog and community site built on Axum. Visitors
//! can browse articles; registered users log in with a username and password
//! and publish short text articles.
//!
//! # Overview
//!
//! - HTML pages rendered from `minijinja` templates
//! - Users and articles stored in SQLite through `sqlx`, schema created by
//!   embedded migrations
//! - Passwords hashed with bcrypt
//! - Sessions carried as HS256-signed JWTs in an `HttpOnly` cookie
//!
//! # Usage
//!
//! ```rust,no_run
//! use techtalk::backend::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Handlers return `backend::BackendError`, which renders as an HTML error
//! page with the matching status code. Wrong credentials and taken usernames
//! are not errors; they are shown inline on the form.

/// Backend server-side code
pub mod backend;
