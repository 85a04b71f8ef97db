/**
 * Access Tokens
 *
 * This module handles JWT access-token issuance and verification. Access
 * tokens are short-lived, stateless assertions of identity: validity is
 * purely a function of the HMAC signature and the embedded expiry at the
 * moment of verification. There is no revocation list; a compromised access
 * token stays usable until it expires, which is why the default lifetime is
 * one hour.
 *
 * # Security
 *
 * - Only HS256 is accepted at verification time. A token whose header names
 *   any other algorithm is rejected outright.
 * - Expiry is checked with zero leeway: a token one second past `exp` is
 *   expired.
 * - Verification fails closed. Every parse, signature, issuer, expiry, or
 *   subject failure is an error; there is no default identity.
 */

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::error::AuthError;

/// Issuer claim stamped into every access token
pub const TOKEN_ISSUER: &str = "chirpy";

/// JWT claims structure
///
/// A plain data record; nothing about the signing algorithm leaks into it.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Issuer, always `"chirpy"`
    pub iss: String,
    /// Subject: the user id as a UUID string
    pub sub: String,
    /// Issued-at time (Unix timestamp, seconds)
    pub iat: i64,
    /// Expiration time (Unix timestamp, seconds)
    pub exp: i64,
}

/// Create a signed access token for a user
///
/// Builds the claim set `{iss: "chirpy", sub: user_id, iat: now,
/// exp: now + expires_in}` and signs it with HS256 keyed by `token_secret`.
///
/// # Arguments
/// * `user_id` - User ID (UUID) to embed as the subject
/// * `token_secret` - Server-held HMAC secret
/// * `expires_in` - Token lifetime relative to now
///
/// # Returns
/// Signed JWT string, or `AuthError::Signing` if signing fails
pub fn make_jwt(
    user_id: Uuid,
    token_secret: &str,
    expires_in: Duration,
) -> Result<String, AuthError> {
    let now = Utc::now();

    let claims = Claims {
        iss: TOKEN_ISSUER.to_string(),
        sub: user_id.to_string(),
        iat: now.timestamp(),
        exp: (now + expires_in).timestamp(),
    };

    let key = EncodingKey::from_secret(token_secret.as_bytes());

    encode(&Header::default(), &claims, &key).map_err(AuthError::Signing)
}

/// Verify an access token and extract the user id
///
/// Rejects the token if the header names any algorithm other than HS256,
/// if the signature does not verify against `token_secret`, if the issuer
/// is not `"chirpy"`, or if the token is expired (zero leeway). On success
/// the subject claim is parsed back into a user id.
///
/// # Errors
///
/// * `AuthError::Expired` - the token is past its expiry
/// * `AuthError::InvalidToken` - any other parse/signature/issuer failure
/// * `AuthError::MalformedSubject` - the subject is not a valid UUID
pub fn validate_jwt(token: &str, token_secret: &str) -> Result<Uuid, AuthError> {
    let key = DecodingKey::from_secret(token_secret.as_bytes());

    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    validation.set_issuer(&[TOKEN_ISSUER]);
    validation.set_required_spec_claims(&["exp", "iss", "sub"]);

    let token_data = decode::<Claims>(token, &key, &validation).map_err(|err| {
        if matches!(err.kind(), ErrorKind::ExpiredSignature) {
            AuthError::Expired
        } else {
            AuthError::InvalidToken(err)
        }
    })?;

    Uuid::parse_str(&token_data.claims.sub).map_err(|_| AuthError::MalformedSubject)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn test_make_and_validate_jwt() {
        let user_id = Uuid::new_v4();
        let token = make_jwt(user_id, SECRET, Duration::minutes(2)).unwrap();
        assert!(!token.is_empty());

        let validated = validate_jwt(&token, SECRET).unwrap();
        assert_eq!(validated, user_id);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let user_id = Uuid::new_v4();
        let token = make_jwt(user_id, SECRET, Duration::minutes(-1)).unwrap();

        let result = validate_jwt(&token, SECRET);
        assert!(matches!(result, Err(AuthError::Expired)));
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let user_id = Uuid::new_v4();
        let token = make_jwt(user_id, "correct-secret", Duration::minutes(2)).unwrap();

        let result = validate_jwt(&token, "wrong-secret");
        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let result = validate_jwt("invalid.token.here", SECRET);
        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn test_substituted_algorithm_is_rejected() {
        // Same secret, same claims, but signed with HS384. Verification pins
        // HS256 and must refuse the token.
        let now = Utc::now();
        let claims = Claims {
            iss: TOKEN_ISSUER.to_string(),
            sub: Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::minutes(2)).timestamp(),
        };
        let key = EncodingKey::from_secret(SECRET.as_bytes());
        let token = encode(&Header::new(Algorithm::HS384), &claims, &key).unwrap();

        let result = validate_jwt(&token, SECRET);
        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn test_wrong_issuer_is_rejected() {
        let now = Utc::now();
        let claims = Claims {
            iss: "someone-else".to_string(),
            sub: Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::minutes(2)).timestamp(),
        };
        let key = EncodingKey::from_secret(SECRET.as_bytes());
        let token = encode(&Header::default(), &claims, &key).unwrap();

        let result = validate_jwt(&token, SECRET);
        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn test_malformed_subject_fails_closed() {
        // A validly signed token whose subject is not a UUID must never
        // produce an identity.
        let now = Utc::now();
        let claims = Claims {
            iss: TOKEN_ISSUER.to_string(),
            sub: "not-a-uuid".to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::minutes(2)).timestamp(),
        };
        let key = EncodingKey::from_secret(SECRET.as_bytes());
        let token = encode(&Header::default(), &claims, &key).unwrap();

        let result = validate_jwt(&token, SECRET);
        assert!(matches!(result, Err(AuthError::MalformedSubject)));
    }

    #[test]
    fn test_token_embeds_expiry_after_issued_at() {
        let token = make_jwt(Uuid::new_v4(), SECRET, Duration::hours(1)).unwrap();
        let key = DecodingKey::from_secret(SECRET.as_bytes());
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[TOKEN_ISSUER]);
        let data = decode::<Claims>(&token, &key, &validation).unwrap();
        assert!(data.claims.exp > data.claims.iat);
    }
}
