//! Password hashing and verification.
//!
//! Argon2id with per-password random salts, stored in PHC string
//! format. Plaintext passwords never leave this module and are never
//! logged.

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use thiserror::Error;

/// Failure while producing a new password hash.
#[derive(Debug, Error)]
#[error("password hashing failed: {0}")]
pub struct HashError(String);

/// Hash a plaintext password for storage.
///
/// Used at account-creation and password-reset time; login never calls
/// this.
pub fn hash_password(password: &str) -> Result<String, HashError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| HashError(err.to_string()))
}

/// Verify a plaintext password against a stored hash.
///
/// A malformed stored hash verifies as `false` rather than erroring: a
/// corrupt directory row must read as a wrong password, not take the
/// login path down.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let parsed = match PasswordHash::new(stored_hash) {
        Ok(parsed) => parsed,
        Err(err) => {
            tracing::debug!(error = %err, "stored password hash is not a valid PHC string");
            return false;
        }
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_round_trip() {
        let hash = hash_password("correct horse battery staple").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("correct horse battery staple", &hash));
    }

    #[test]
    fn wrong_password_is_rejected() {
        let hash = hash_password("s3cret").unwrap();
        assert!(!verify_password("s3cret2", &hash));
        assert!(!verify_password("", &hash));
    }

    #[test]
    fn same_password_hashes_differently() {
        let a = hash_password("s3cret").unwrap();
        let b = hash_password("s3cret").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn malformed_stored_hash_verifies_false() {
        assert!(!verify_password("s3cret", "not-a-phc-string"));
        assert!(!verify_password("s3cret", ""));
        assert!(!verify_password("s3cret", "$argon2id$garbage"));
    }
}
