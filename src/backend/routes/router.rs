/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Page routes (home, about, contact, counters)
 * 2. Blog routes
 * 3. Authentication routes
 * 4. Static files under `/static`
 * 5. Fallback handler (404 page)
 */

use std::path::Path;

use axum::Router;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::backend::error::BackendError;
use crate::backend::routes::auth_routes::configure_auth_routes;
use crate::backend::routes::page_routes::{configure_blog_routes, configure_page_routes};
use crate::backend::server::state::AppState;

async fn not_found() -> BackendError {
    BackendError::not_found("Page not found")
}

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Shared handles used by every handler
/// * `static_dir` - Directory served under `/static`
///
/// # Returns
///
/// Configured Axum Router ready to serve requests. Every request is traced
/// through `TraceLayer`.
pub fn create_router(app_state: AppState, static_dir: impl AsRef<Path>) -> Router<()> {
    let router = configure_page_routes(Router::new());
    let router = configure_blog_routes(router);
    let router = configure_auth_routes(router);

    router
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
