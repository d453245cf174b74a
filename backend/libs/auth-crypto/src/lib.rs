/// Authentication primitives shared across the Ripple workspace.
///
/// Two stateless capabilities live here:
///
/// - `password`: salted Argon2id hashing and verification
/// - `jwt`: signing and verification of session tokens
///
/// Both are constructed from configuration by the caller and injected where
/// they are needed; this crate holds no global state.
use thiserror::Error;

pub mod jwt;
pub mod password;

pub use jwt::{SessionClaims, TokenCodec};
pub use password::{hash_password, verify_password};

/// Errors produced by the crypto primitives.
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("failed to sign session token")]
    TokenCreation,

    #[error("invalid session token")]
    TokenInvalid,

    #[error("password hashing failed: {0}")]
    Hash(String),

    #[error("stored password hash is malformed: {0}")]
    HashFormat(String),
}
