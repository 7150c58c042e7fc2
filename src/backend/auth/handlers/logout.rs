/**
 * Logout Handler
 *
 * Clears the session cookie and redirects home. Tokens are not tracked on the
 * server, so a copy of the token stays valid until it expires.
 */

use axum::response::Redirect;
use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::backend::auth::sessions::SESSION_COOKIE;

/// `GET /logout`
pub async fn logout(jar: CookieJar) -> (CookieJar, Redirect) {
    tracing::debug!("Clearing session cookie");
    (jar.remove(Cookie::build(SESSION_COOKIE).path("/")), Redirect::to("/"))
}
