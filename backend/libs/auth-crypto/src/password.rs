/// Password hashing and verification using Argon2id.
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::CryptoError;

/// Hash a password with a random per-password salt.
///
/// Returns a PHC-formatted hash string safe for storage.
pub fn hash_password(password: &str) -> Result<String, CryptoError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| CryptoError::Hash(e.to_string()))
}

/// Verify a password against a stored PHC hash.
///
/// Returns `Ok(false)` on mismatch; errors only when the stored hash itself
/// is unusable.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, CryptoError> {
    let parsed = PasswordHash::new(password_hash)
        .map_err(|e| CryptoError::HashFormat(e.to_string()))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(CryptoError::Hash(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_round_trip() {
        let hash = hash_password("hunter2!").expect("should hash");
        assert!(verify_password("hunter2!", &hash).expect("should verify"));
    }

    #[test]
    fn wrong_password_fails_verification() {
        let hash = hash_password("hunter2!").unwrap();
        assert!(!verify_password("hunter3!", &hash).unwrap());
    }

    #[test]
    fn same_password_hashes_differently() {
        // Random salts mean two hashes of the same input never collide.
        let first = hash_password("hunter2!").unwrap();
        let second = hash_password("hunter2!").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn malformed_stored_hash_is_an_error() {
        assert!(matches!(
            verify_password("hunter2!", "not-a-phc-string"),
            Err(CryptoError::HashFormat(_))
        ));
    }
}
