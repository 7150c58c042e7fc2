/**
 * Password Hashing
 *
 * Thin adapter over bcrypt. Hashing is CPU-bound, so both operations run on
 * Tokio's blocking pool instead of the request task.
 */

use crate::backend::error::BackendError;

/// Lowest work factor bcrypt accepts
pub const MIN_BCRYPT_COST: u32 = 4;
/// Highest work factor bcrypt accepts
pub const MAX_BCRYPT_COST: u32 = 31;

/// Salted bcrypt hash-and-verify
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password with a fresh salt
    pub async fn hash(&self, password: &str) -> Result<String, BackendError> {
        let cost = self.cost;
        let password = password.to_owned();
        let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| BackendError::internal(format!("password hashing task failed: {}", e)))??;
        Ok(hashed)
    }

    /// Check a plaintext password against a stored hash
    ///
    /// A stored value that is not a bcrypt hash is an error, not a mismatch.
    pub async fn verify(&self, password: &str, hashed: &str) -> Result<bool, BackendError> {
        let password = password.to_owned();
        let hashed = hashed.to_owned();
        let valid = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hashed))
            .await
            .map_err(|e| BackendError::internal(format!("password verification task failed: {}", e)))??;
        Ok(valid)
    }
}
