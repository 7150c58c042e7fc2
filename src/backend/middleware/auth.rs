/**
 * Session Verification
 *
 * This module turns the `access_token` cookie into a user. There is a single
 * verification primitive, [`verify_session`], and a [`FailurePolicy`]
 * deciding what an authentication failure means:
 *
 * - `Anonymous` (soft): the request continues as an anonymous visitor. Used
 *   by every page so browsing works without an account.
 * - `Reject` (strict): the request fails with 401. Used by protected actions.
 *
 * Authentication failures are: no cookie, a token that does not verify
 * (signature, structure, expiry), and a subject that is no longer in the
 * store. Store failures are not authentication failures and propagate under
 * both policies.
 *
 * Handlers use the policies through two extractors:
 *
 * ```rust,no_run
 * use techtalk::backend::middleware::{AuthUser, CurrentUser};
 *
 * async fn page(CurrentUser(user): CurrentUser) -> String {
 *     user.map(|u| u.username).unwrap_or_default()
 * }
 *
 * async fn action(AuthUser(user): AuthUser) -> String {
 *     user.username
 * }
 * ```
 */

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::CookieJar;
use thiserror::Error;

use crate::backend::auth::sessions::{SessionError, SESSION_COOKIE};
use crate::backend::auth::users::{get_user_by_id, User};
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// What an authentication failure turns into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Fail the request with 401 Unauthorized
    Reject,
    /// Continue without a user
    Anonymous,
}

/// Why a request could not be tied to a user
#[derive(Debug, Error)]
enum AuthError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("user {0} from session token no longer exists")]
    UnknownUser(i64),
    #[error(transparent)]
    Store(#[from] sqlx::Error),
}

async fn authenticate(state: &AppState, cookies: &CookieJar) -> Result<User, AuthError> {
    let token = cookies.get(SESSION_COOKIE).map(|cookie| cookie.value());
    let claims = state.sessions.verify_optional(token)?;
    let user_id = claims.user_id()?;

    get_user_by_id(&state.db, user_id)
        .await?
        .ok_or(AuthError::UnknownUser(user_id))
}

/// Resolve the session cookie to a user under the given failure policy
///
/// # Returns
///
/// - `Ok(Some(user))` - valid session
/// - `Ok(None)` - authentication failed under `FailurePolicy::Anonymous`
/// - `Err(BackendError::Unauthorized)` - authentication failed under
///   `FailurePolicy::Reject`
/// - `Err(BackendError::Database)` - the store lookup failed
pub async fn verify_session(
    state: &AppState,
    cookies: &CookieJar,
    policy: FailurePolicy,
) -> Result<Option<User>, BackendError> {
    match authenticate(state, cookies).await {
        Ok(user) => Ok(Some(user)),
        Err(AuthError::Store(e)) => Err(e.into()),
        Err(reason) => match policy {
            FailurePolicy::Anonymous => {
                tracing::debug!("Continuing anonymously: {}", reason);
                Ok(None)
            }
            FailurePolicy::Reject => {
                tracing::warn!("Rejecting request: {}", reason);
                Err(BackendError::unauthorized("Could not validate credentials"))
            }
        },
    }
}

/// Axum extractor for the optional current user (soft verification)
#[derive(Clone, Debug)]
pub struct CurrentUser(pub Option<User>);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let cookies = CookieJar::from_headers(&parts.headers);
        let user = verify_session(state, &cookies, FailurePolicy::Anonymous).await?;
        Ok(CurrentUser(user))
    }
}

/// Axum extractor for an authenticated user (strict verification)
///
/// Rejects with 401 before any later extractor (such as the form body) runs.
#[derive(Clone, Debug)]
pub struct AuthUser(pub User);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let cookies = CookieJar::from_headers(&parts.headers);
        verify_session(state, &cookies, FailurePolicy::Reject)
            .await?
            .map(AuthUser)
            .ok_or_else(|| BackendError::unauthorized("Could not validate credentials"))
    }
}
