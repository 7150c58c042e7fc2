/**
 * User Model and Database Operations
 *
 * This module handles user data and database operations.
 *
 * Users are created at registration and never updated or deleted. Username
 * uniqueness is enforced by a `UNIQUE` constraint on `users.username`; the
 * registration handler also checks beforehand so the common case produces a
 * friendly message.
 */

use serde::Serialize;
use sqlx::SqlitePool;

/// User struct representing a user in the database
///
/// Serializes without the password hash, so it can be handed to templates.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID
    pub id: i64,
    /// Username (unique)
    pub username: String,
    /// User email address
    pub email: String,
    /// Hashed password (bcrypt)
    #[serde(skip_serializing)]
    pub hashed_password: String,
}

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `username` - User's chosen username
/// * `email` - User email
/// * `hashed_password` - Hashed password
///
/// # Returns
/// Created user or error. A taken username fails with a unique-constraint
/// database error (see [`is_unique_violation`]).
pub async fn create_user(
    pool: &SqlitePool,
    username: &str,
    email: &str,
    hashed_password: &str,
) -> Result<User, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (username, email, hashed_password)
        VALUES (?, ?, ?)
        RETURNING id, username, email, hashed_password
        "#,
    )
    .bind(username)
    .bind(email)
    .bind(hashed_password)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by username
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, email, hashed_password
        FROM users
        WHERE username = ?
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get user by ID
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, email, hashed_password
        FROM users
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Whether a store error is a unique-constraint violation
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::test_support::memory_pool;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_create_and_lookup() {
        let pool = memory_pool().await;

        let user = create_user(&pool, "alice", "alice@example.com", "hash").await.unwrap();
        assert!(user.id > 0);
        assert_eq!(user.username, "alice");

        let by_name = get_user_by_username(&pool, "alice").await.unwrap().unwrap();
        assert_eq!(by_name.id, user.id);
        assert_eq!(by_name.hashed_password, "hash");

        let by_id = get_user_by_id(&pool, user.id).await.unwrap().unwrap();
        assert_eq!(by_id.email, "alice@example.com");
    }

    #[tokio::test]
    async fn test_lookup_missing_user() {
        let pool = memory_pool().await;
        assert!(get_user_by_username(&pool, "nobody").await.unwrap().is_none());
        assert!(get_user_by_id(&pool, 999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_username_is_unique_violation() {
        let pool = memory_pool().await;
        create_user(&pool, "alice", "a@example.com", "hash").await.unwrap();

        let err = create_user(&pool, "alice", "b@example.com", "hash").await.unwrap_err();
        assert!(is_unique_violation(&err));

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_serialization_skips_password_hash() {
        let user = User {
            id: 1,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            hashed_password: "secret-hash".to_string(),
        };
        let value = minijinja::Value::from_serialize(&user);
        assert!(value.get_attr("hashed_password").unwrap().is_undefined());
        assert_eq!(value.get_attr("username").unwrap().as_str(), Some("alice"));
    }

    #[test]
    fn test_not_found_is_not_unique_violation() {
        assert!(!is_unique_violation(&sqlx::Error::RowNotFound));
    }
}
