/**
 * Request Credential Extraction
 *
 * Pure header-parsing helpers that pull a credential string out of the
 * `Authorization` header. Two schemes are recognized:
 *
 * - `Authorization: Bearer <token>` - access or refresh tokens
 * - `Authorization: ApiKey <key>`   - service-to-service API keys
 *
 * Both extractors are pure string operations with no I/O and no side
 * effects; they return a tagged result so callers must handle both
 * branches.
 */

use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::auth::error::AuthError;

/// Extract a bearer token from the Authorization header
///
/// Fails if the header is absent, does not start with `Bearer `, or holds
/// nothing but whitespace after the prefix. Surrounding whitespace is
/// trimmed from the returned token.
pub fn bearer_token(headers: &HeaderMap) -> Result<String, AuthError> {
    credential_with_scheme(headers, "Bearer ")
}

/// Extract an API key from the Authorization header
///
/// Same rules as `bearer_token`, with the `ApiKey ` prefix instead.
pub fn api_key(headers: &HeaderMap) -> Result<String, AuthError> {
    credential_with_scheme(headers, "ApiKey ")
}

fn credential_with_scheme(headers: &HeaderMap, prefix: &str) -> Result<String, AuthError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(AuthError::MissingCredential)?;

    let credential = auth_header
        .strip_prefix(prefix)
        .ok_or(AuthError::MalformedCredential)?
        .trim();

    if credential.is_empty() {
        return Err(AuthError::MalformedCredential);
    }

    Ok(credential.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value.parse().unwrap());
        headers
    }

    #[test]
    fn test_bearer_token_extracted() {
        let headers = headers_with("Bearer abc123");
        assert_eq!(bearer_token(&headers).unwrap(), "abc123");
    }

    #[test]
    fn test_bearer_token_trims_whitespace() {
        let headers = headers_with("Bearer   abc123");
        assert_eq!(bearer_token(&headers).unwrap(), "abc123");
    }

    #[test]
    fn test_missing_header_is_rejected() {
        let headers = HeaderMap::new();
        assert!(matches!(
            bearer_token(&headers),
            Err(AuthError::MissingCredential)
        ));
    }

    #[test]
    fn test_empty_bearer_token_is_rejected() {
        let headers = headers_with("Bearer ");
        assert!(matches!(
            bearer_token(&headers),
            Err(AuthError::MalformedCredential)
        ));
    }

    #[test]
    fn test_wrong_scheme_is_rejected() {
        let headers = headers_with("Basic xyz");
        assert!(matches!(
            bearer_token(&headers),
            Err(AuthError::MalformedCredential)
        ));
    }

    #[test]
    fn test_api_key_extracted() {
        let headers = headers_with("ApiKey k-123");
        assert_eq!(api_key(&headers).unwrap(), "k-123");
    }

    #[test]
    fn test_api_key_rejects_bearer_scheme() {
        let headers = headers_with("Bearer k-123");
        assert!(matches!(
            api_key(&headers),
            Err(AuthError::MalformedCredential)
        ));
    }

    #[test]
    fn test_bearer_rejects_api_key_scheme() {
        let headers = headers_with("ApiKey abc123");
        assert!(matches!(
            bearer_token(&headers),
            Err(AuthError::MalformedCredential)
        ));
    }

    #[test]
    fn test_empty_api_key_is_rejected() {
        let headers = headers_with("ApiKey   ");
        assert!(matches!(
            api_key(&headers),
            Err(AuthError::MalformedCredential)
        ));
    }
}
