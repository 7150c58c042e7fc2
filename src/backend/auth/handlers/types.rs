/**
 * Authentication Form Types
 *
 * Form bodies for the login and registration pages. Every field is required;
 * a request missing one is rejected by the `Form` extractor with 422 before
 * the handler runs.
 */

use serde::Deserialize;

/// Login form
#[derive(Deserialize, Debug)]
pub struct LoginForm {
    pub username: String,
    /// Plaintext password, checked against the stored bcrypt hash
    pub password: String,
}

/// Registration form
#[derive(Deserialize, Debug)]
pub struct RegisterForm {
    /// User's chosen username (must not be taken)
    pub username: String,
    pub email: String,
    /// Plaintext password (hashed before storage)
    pub password: String,
}

/// Inline error shown when the username or password is wrong
pub const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Inline error shown when registering a taken username
pub const USERNAME_TAKEN: &str = "A user with this name already exists";
