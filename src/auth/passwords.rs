/**
 * Password Hashing
 *
 * This module handles one-way hashing and verification of user passwords
 * using bcrypt. Raw passwords exist only transiently in request handling;
 * only the salted digest is ever stored.
 */

use bcrypt::{hash, verify, DEFAULT_COST};

use crate::auth::error::AuthError;

/// Hash a password for storage
///
/// Uses bcrypt with the default cost factor. The input is never validated
/// for shape here; empty or over-long passwords are a handler concern.
///
/// # Errors
///
/// Returns `AuthError::Hashing` only on internal failure of the hashing
/// routine. On failure there is no hash value at all - callers must rely
/// solely on the error signal.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    hash(password, DEFAULT_COST).map_err(AuthError::Hashing)
}

/// Verify a password against a stored hash
///
/// bcrypt performs the comparison in constant time. The result says only
/// whether the password matched; a mismatch carries no further detail.
///
/// # Errors
///
/// Returns `AuthError::BadHash` when the stored hash cannot be parsed.
/// A mismatching password is `Ok(false)`, not an error.
pub fn verify_password(password: &str, hashed: &str) -> Result<bool, AuthError> {
    verify(password, hashed).map_err(AuthError::BadHash)
}
