/**
 * Registration Handler
 *
 * This module implements `GET /register` and `POST /register`.
 *
 * # Registration Process
 *
 * 1. Check that the username is free
 * 2. Hash the password using bcrypt
 * 3. Insert the user
 * 4. Render the confirmation page (the user still has to log in)
 *
 * A taken username re-renders the form with an inline error. Two concurrent
 * registrations can both pass step 1; the `UNIQUE` constraint then rejects the
 * second insert and it gets the same inline error.
 */

use axum::{extract::State, response::Html, Form};
use minijinja::context;

use crate::backend::auth::handlers::types::{RegisterForm, USERNAME_TAKEN};
use crate::backend::auth::users::{create_user, get_user_by_username, is_unique_violation, User};
use crate::backend::error::BackendError;
use crate::backend::middleware::CurrentUser;
use crate::backend::server::state::AppState;

fn register_page(
    state: &AppState,
    user: Option<User>,
    error: Option<&str>,
) -> Result<Html<String>, BackendError> {
    state.templates.render(
        "register.html",
        context! { title => "Register", current_user => user, error => error },
    )
}

/// Render the registration form
pub async fn register_form(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Html<String>, BackendError> {
    register_page(&state, user, None)
}

/// Registration handler
///
/// # Errors
///
/// * `500 Internal Server Error` - store or hashing failure
pub async fn register(
    State(state): State<AppState>,
    CurrentUser(current): CurrentUser,
    Form(form): Form<RegisterForm>,
) -> Result<Html<String>, BackendError> {
    tracing::info!("Registration request for: {}", form.username);

    if get_user_by_username(&state.db, &form.username).await?.is_some() {
        tracing::warn!("Username already taken: {}", form.username);
        return register_page(&state, current, Some(USERNAME_TAKEN));
    }

    let hashed_password = state.passwords.hash(&form.password).await?;

    let user = match create_user(&state.db, &form.username, &form.email, &hashed_password).await {
        Ok(user) => user,
        Err(e) if is_unique_violation(&e) => {
            tracing::warn!("Username taken during insert: {}", form.username);
            return register_page(&state, current, Some(USERNAME_TAKEN));
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!("User registered: {} ({})", user.username, user.id);

    state.templates.render(
        "register_success.html",
        context! { title => "Registered", current_user => current, username => user.username },
    )
}
