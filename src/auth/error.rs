/**
 * Auth Core Errors
 *
 * Fine-grained failure modes for the authentication core. These carry enough
 * detail for tests and callers inside the crate to distinguish, say, an
 * expired token from a bad signature, but they are collapsed into the
 * transport classification (`ApiError`) before anything leaves a handler -
 * a 401 response never reveals which check failed.
 */

use thiserror::Error;

/// Failures produced by the authentication core
///
/// Variants fall into two groups:
///
/// - **Credential failures** (`MissingCredential`, `MalformedCredential`,
///   `Expired`, `InvalidToken`, `MalformedSubject`) - the presented
///   credential could not be accepted. All of these classify as 401.
/// - **Internal failures** (`Hashing`, `BadHash`, `Signing`, `Entropy`) -
///   the server itself failed; these classify as 500.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Password hashing failed. No sentinel hash value accompanies this
    /// error; callers must treat the operation as having produced nothing.
    #[error("failed to hash password")]
    Hashing(#[source] bcrypt::BcryptError),

    /// The stored password hash could not be parsed
    #[error("stored password hash is malformed")]
    BadHash(#[source] bcrypt::BcryptError),

    /// Signing an access token failed
    #[error("failed to sign access token")]
    Signing(#[source] jsonwebtoken::errors::Error),

    /// The OS random source failed while generating a refresh token
    #[error("failed to read from the system random source")]
    Entropy(#[from] getrandom::Error),

    /// The access token is past its expiry
    #[error("token has expired")]
    Expired,

    /// The access token failed verification for any non-expiry reason:
    /// garbage input, bad signature, unexpected signing algorithm, or
    /// wrong issuer
    #[error("invalid token")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),

    /// The token verified but its subject is not a valid user id
    #[error("token subject is not a valid user id")]
    MalformedSubject,

    /// No Authorization header was present
    #[error("authorization header missing")]
    MissingCredential,

    /// The Authorization header had the wrong scheme or an empty value
    #[error("malformed authorization header")]
    MalformedCredential,
}
