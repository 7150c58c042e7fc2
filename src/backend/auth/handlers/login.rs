/**
 * Login Handler
 *
 * This module implements `GET /login` and `POST /login`.
 *
 * # Authentication Process
 *
 * 1. Look up user by username
 * 2. Verify password using bcrypt
 * 3. Issue a session token with the configured login lifetime
 * 4. Store it in the `access_token` cookie and redirect to `/`
 *
 * # Security
 *
 * - Unknown usernames and wrong passwords produce the same inline error
 * - The cookie is `HttpOnly` so page scripts cannot read the token
 * - Passwords are never logged
 */

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use minijinja::context;

use crate::backend::auth::handlers::types::{LoginForm, INVALID_CREDENTIALS};
use crate::backend::auth::sessions::SESSION_COOKIE;
use crate::backend::auth::users::{get_user_by_username, User};
use crate::backend::error::BackendError;
use crate::backend::middleware::CurrentUser;
use crate::backend::server::state::AppState;

fn login_page(
    state: &AppState,
    user: Option<User>,
    error: Option<&str>,
) -> Result<Html<String>, BackendError> {
    state.templates.render(
        "login.html",
        context! { title => "Login", current_user => user, error => error },
    )
}

/// Render the login form
pub async fn login_form(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Html<String>, BackendError> {
    login_page(&state, user, None)
}

/// Login handler
///
/// # Returns
///
/// * `303 See Other` to `/` with the session cookie set - credentials valid
/// * `200 OK` login page with an inline error - unknown user or wrong password
///
/// # Errors
///
/// * `500 Internal Server Error` - store, hashing or token failure
pub async fn login(
    State(state): State<AppState>,
    CurrentUser(current): CurrentUser,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<Response, BackendError> {
    tracing::info!("Login request for: {}", form.username);

    let Some(user) = get_user_by_username(&state.db, &form.username).await? else {
        tracing::warn!("User not found: {}", form.username);
        return Ok(login_page(&state, current, Some(INVALID_CREDENTIALS))?.into_response());
    };

    if !state.passwords.verify(&form.password, &user.hashed_password).await? {
        tracing::warn!("Invalid password for user: {}", form.username);
        return Ok(login_page(&state, current, Some(INVALID_CREDENTIALS))?.into_response());
    }

    let token = state.sessions.issue(user.id, Some(state.login_token_ttl))?;
    let cookie = Cookie::build((SESSION_COOKIE, token)).http_only(true).path("/");

    tracing::info!("User logged in successfully: {} ({})", user.username, user.id);

    Ok((jar.add(cookie), Redirect::to("/")).into_response())
}
