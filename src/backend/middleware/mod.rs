//! Middleware Module
//!
//! Request processing that runs before handlers. Session verification lives
//! here as request extractors rather than a router layer, so each route picks
//! its own failure policy.
//!
//! - **`auth`** - soft (`CurrentUser`) and strict (`AuthUser`) session checks

pub mod auth;

pub use auth::{verify_session, AuthUser, CurrentUser, FailurePolicy};
