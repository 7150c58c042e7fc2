//! Authentication Module
//!
//! This module handles user registration, login and session tokens.
//!
//! # Architecture
//!
//! - **`users`** - User data model and database operations
//! - **`password`** - bcrypt hashing on the blocking pool
//! - **`sessions`** - Session token (JWT) issue and verification
//! - **`handlers`** - HTTP handlers for the login, logout and register pages
//!
//! Request-time verification of the session cookie lives in
//! `backend::middleware::auth`.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── password.rs     - Password hashing
//! ├── sessions.rs     - Session token codec
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Session tokens are HS256-signed JWTs carried in an `HttpOnly` cookie
//! - Tokens are not revocable; logout only clears the cookie

/// User data model and database operations
pub mod users;

/// Password hashing
pub mod password;

/// Session token issue and verification
pub mod sessions;

/// HTTP handlers for authentication pages
pub mod handlers;

pub use handlers::{login, login_form, logout, register, register_form};
pub use password::PasswordHasher;
pub use sessions::{Claims, SessionCodec, SessionError, SESSION_COOKIE};
pub use users::User;
