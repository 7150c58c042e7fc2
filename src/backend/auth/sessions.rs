/**
 * Session Tokens
 *
 * This module issues and decodes the signed, expiring session tokens carried
 * in the `access_token` cookie.
 *
 * Tokens are HS256 JWTs with three claims: `sub` (user id as a string), `iat`
 * and `exp`. Expiry is checked with zero leeway, so a token whose `exp` is not
 * strictly in the future never verifies.
 *
 * There is no server-side revocation: logging out only drops the cookie, and
 * a copied token stays valid until `exp`.
 */

use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the cookie holding the session token
pub const SESSION_COOKIE: &str = "access_token";

/// Token lifetime when the caller does not ask for one
pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 15;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

impl Claims {
    /// User id carried in `sub`
    pub fn user_id(&self) -> Result<i64, SessionError> {
        self.sub
            .parse()
            .map_err(|_| SessionError::MalformedSubject(self.sub.clone()))
    }
}

/// Reasons a session token is not accepted
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no session token presented")]
    MissingToken,
    #[error("session token has expired")]
    Expired,
    #[error("invalid session token: {0}")]
    Invalid(jsonwebtoken::errors::Error),
    #[error("session token subject is not a user id: {0}")]
    MalformedSubject(String),
}

impl From<jsonwebtoken::errors::Error> for SessionError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::ExpiredSignature => Self::Expired,
            _ => Self::Invalid(err),
        }
    }
}

struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

/// Issues and verifies session tokens with a shared HS256 secret
#[derive(Clone)]
pub struct SessionCodec {
    keys: Arc<Keys>,
}

impl SessionCodec {
    /// Create a codec for the given signing secret
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            keys: Arc::new(Keys {
                encoding: EncodingKey::from_secret(secret),
                decoding: DecodingKey::from_secret(secret),
                validation,
            }),
        }
    }

    /// Create a signed token for a user
    ///
    /// # Arguments
    /// * `user_id` - Subject of the token
    /// * `ttl` - Lifetime; `None` means [`DEFAULT_TOKEN_TTL_MINUTES`]
    ///
    /// # Returns
    /// JWT token string, or `InvalidClaimFormat` when `now + ttl` is past the
    /// representable date range
    pub fn issue(&self, user_id: i64, ttl: Option<Duration>) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let ttl = ttl.unwrap_or_else(|| Duration::minutes(DEFAULT_TOKEN_TTL_MINUTES));
        let expires_at = now
            .checked_add_signed(ttl)
            .ok_or_else(|| ErrorKind::InvalidClaimFormat("exp out of range".to_string()))?;

        let claims = Claims {
            sub: user_id.to_string(),
            exp: expires_at.timestamp().max(0) as u64,
            iat: now.timestamp().max(0) as u64,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.keys.encoding)
    }

    /// Verify and decode a token
    ///
    /// # Returns
    /// Decoded claims, or the reason the token is rejected
    pub fn verify(&self, token: &str) -> Result<Claims, SessionError> {
        let claims = decode::<Claims>(token, &self.keys.decoding, &self.keys.validation)?.claims;

        // the library accepts exp == now
        if claims.exp <= Utc::now().timestamp().max(0) as u64 {
            return Err(SessionError::Expired);
        }

        Ok(claims)
    }

    /// Verify a token that may be absent
    pub fn verify_optional(&self, token: Option<&str>) -> Result<Claims, SessionError> {
        match token {
            Some(token) if !token.is_empty() => self.verify(token),
            _ => Err(SessionError::MissingToken),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    fn codec() -> SessionCodec {
        SessionCodec::new(b"test-secret")
    }

    #[test]
    fn test_issue_and_verify() {
        let codec = codec();
        let token = codec.issue(42, Some(Duration::minutes(30))).unwrap();
        assert!(!token.is_empty());

        let claims = codec.verify(&token).unwrap();
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.user_id().unwrap(), 42);
        assert_eq!(claims.exp - claims.iat, 30 * 60);
    }

    #[test]
    fn test_default_ttl_is_fifteen_minutes() {
        let codec = codec();
        let token = codec.issue(7, None).unwrap();
        let claims = codec.verify(&token).unwrap();
        assert_eq!(claims.exp - claims.iat, 15 * 60);
    }

    #[test]
    fn test_zero_ttl_is_expired() {
        let codec = codec();
        let token = codec.issue(1, Some(Duration::zero())).unwrap();
        assert_matches!(codec.verify(&token), Err(SessionError::Expired));
    }

    #[test]
    fn test_past_expiry_is_expired() {
        let codec = codec();
        let token = codec.issue(1, Some(Duration::minutes(-5))).unwrap();
        assert_matches!(codec.verify(&token), Err(SessionError::Expired));
    }

    #[test]
    fn test_out_of_range_ttl_is_error() {
        let result = codec().issue(1, Some(Duration::MAX));
        assert_matches!(
            result.map_err(|e| e.into_kind()),
            Err(ErrorKind::InvalidClaimFormat(_))
        );
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let token = SessionCodec::new(b"other-secret")
            .issue(1, None)
            .unwrap();
        assert_matches!(codec().verify(&token), Err(SessionError::Invalid(_)));
    }

    #[test]
    fn test_malformed_token_is_invalid() {
        assert_matches!(codec().verify("invalid.token.here"), Err(SessionError::Invalid(_)));
        assert_matches!(codec().verify("garbage"), Err(SessionError::Invalid(_)));
    }

    #[test]
    fn test_missing_token() {
        assert_matches!(codec().verify_optional(None), Err(SessionError::MissingToken));
        assert_matches!(codec().verify_optional(Some("")), Err(SessionError::MissingToken));
    }

    #[test]
    fn test_non_numeric_subject() {
        let claims = Claims {
            sub: "alice".to_string(),
            exp: 0,
            iat: 0,
        };
        assert_matches!(claims.user_id(), Err(SessionError::MalformedSubject(sub)) if sub == "alice");
    }
}
