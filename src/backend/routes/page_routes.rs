/**
 * Page and Blog Routes
 *
 * ## Pages
 * - `GET /` - Home page
 * - `GET /about` - About page
 * - `GET /contact`, `POST /contact` - Contact form and thank-you page
 * - `GET /counters` - Counters page
 *
 * ## Blog
 * - `GET /blog` - Article list
 * - `GET /blog/create` - Submission form
 * - `POST /blog/create` - Create article (requires authentication)
 * - `GET /blog/{id}` - Article detail
 */

use axum::{routing::get, Router};

use crate::backend::blog::{article_detail, blog_index, create_article_form, submit_article};
use crate::backend::pages::{about, contact_form, counters, home, submit_contact};
use crate::backend::server::state::AppState;

/// Configure informational pages
pub fn configure_page_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/", get(home))
        .route("/about", get(about))
        .route("/contact", get(contact_form).post(submit_contact))
        .route("/counters", get(counters))
}

/// Configure blog routes
///
/// `/blog/create` is a static segment, so it takes precedence over the
/// `/blog/{id}` capture.
pub fn configure_blog_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/blog", get(blog_index))
        .route("/blog/create", get(create_article_form).post(submit_article))
        .route("/blog/{id}", get(article_detail))
}
