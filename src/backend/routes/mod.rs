//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//! Routes are organized by functionality into focused submodules.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! ├── page_routes.rs  - Informational pages and the blog
//! └── auth_routes.rs  - Login, logout and registration
//! ```
//!
//! # Authentication
//!
//! Every page resolves the session softly and renders for anonymous visitors.
//! Only `POST /blog/create` requires a valid session and answers 401 without
//! one.
//!
//! # Example
//!
//! ```rust,no_run
//! use techtalk::backend::routes::create_router;
//! use techtalk::backend::server::state::AppState;
//!
//! # fn example(app_state: AppState) {
//! let router = create_router(app_state, "static");
//! # }
//! ```

/// Main router assembly
pub mod router;

/// Page and blog routes
pub mod page_routes;

/// Authentication routes
pub mod auth_routes;

pub use router::create_router;
