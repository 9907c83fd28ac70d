//! Salted one-way password hashing (Argon2id, PHC string format).

use std::sync::LazyLock;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::error::DaoError;

/// Stands in for the stored hash of an account that does not exist.
static DUMMY_HASH: LazyLock<Option<String>> = LazyLock::new(|| hash_password("no-such-account").ok());

/// Hashes `plaintext` with a fresh random salt.
pub fn hash_password(plaintext: &str) -> Result<String, DaoError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plaintext.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| DaoError::PasswordHash(e.to_string()))
}

/// Checks `plaintext` against a stored hash. A malformed stored hash never verifies.
pub fn verify_password(plaintext: &str, stored_hash: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(plaintext.as_bytes(), &parsed)
            .is_ok(),
        Err(e) => {
            tracing::warn!("Stored password hash could not be parsed: {}", e);
            false
        }
    }
}

/// Spends one full verification on a fixed hash and always fails, so a lookup
/// miss costs the same as a wrong password.
pub fn verify_unknown_user(plaintext: &str) -> bool {
    if let Some(hash) = DUMMY_HASH.as_deref() {
        let _ = verify_password(plaintext, hash);
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_not_plaintext_and_verifies() {
        let hash = hash_password("admin123").unwrap();

        assert_ne!(hash, "admin123");
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("admin123", &hash));
        assert!(!verify_password("wrong", &hash));
    }

    #[test]
    fn test_same_password_gets_different_salts() {
        let first = hash_password("user123").unwrap();
        let second = hash_password("user123").unwrap();

        assert_ne!(first, second);
        assert!(verify_password("user123", &first));
        assert!(verify_password("user123", &second));
    }

    #[test]
    fn test_malformed_hash_never_verifies() {
        assert!(!verify_password("user123", "user123"));
    }

    #[test]
    fn test_unknown_user_runs_a_real_verification_and_fails() {
        let dummy = DUMMY_HASH.as_deref().expect("dummy hash should be computed");
        assert!(dummy.starts_with("$argon2id$"));
        assert!(PasswordHash::new(dummy).is_ok());

        assert!(!verify_unknown_user("admin123"));
        assert!(!verify_unknown_user("no-such-account"));
    }
}
