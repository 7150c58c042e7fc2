//! Authentication Handlers Module
//!
//! This module contains the HTTP handlers for the login, logout and
//! registration pages.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Module exports and documentation
//! ├── types.rs     - Form bodies and inline error messages
//! ├── login.rs     - GET/POST /login
//! ├── logout.rs    - GET /logout
//! └── register.rs  - GET/POST /register
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: username, email and password → user created → confirmation page
//! 2. **Login**: username and password verified → session cookie set → redirect to `/`
//! 3. **Logout**: session cookie removed → redirect to `/`
//!
//! Bad credentials and taken usernames are shown inline on the form with
//! status 200; they are never turned into error responses.

/// Form bodies
pub mod types;

/// Login handlers
pub mod login;

/// Logout handler
pub mod logout;

/// Registration handlers
pub mod register;

pub use login::{login, login_form};
pub use logout::logout;
pub use register::{register, register_form};
pub use types::{LoginForm, RegisterForm};
