//! Common test utilities and helpers
//!
//! - HTTP fixture around the real router on an in-memory database
//! - Authentication helpers (register, login)
//! - Custom assertion macros

// each test binary uses a different subset of these helpers
#![allow(dead_code, unused_imports, unused_macros)]

pub mod app;
#[macro_use]
pub mod assertions;
pub mod auth_helpers;

pub use app::*;
pub use auth_helpers::*;
