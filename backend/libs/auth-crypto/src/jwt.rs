/// Session-token signing and verification.
///
/// Tokens are HS256 JWTs carrying the user's id and email. They are
/// stateless: there is no server-side session table and no revocation list.
/// Session tokens carry no expiry claim; verification checks the signature
/// only (see DESIGN.md for the recorded gap).
use chrono::Utc;
use jsonwebtoken::{
    decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::CryptoError;

const ALGORITHM: Algorithm = Algorithm::HS256;

/// Claims embedded in a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (user id as UUID string)
    pub sub: String,
    /// Email address bound to the session
    pub email: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
}

impl SessionClaims {
    /// Parse the subject back into a user id.
    pub fn user_id(&self) -> Result<Uuid, CryptoError> {
        Uuid::parse_str(&self.sub).map_err(|_| CryptoError::TokenInvalid)
    }
}

/// Signs and verifies session tokens with a shared secret.
///
/// Built once at startup from process configuration and handed to whichever
/// component needs it.
#[derive(Clone)]
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenCodec {
    pub fn from_secret(secret: &str) -> Self {
        let mut validation = Validation::new(ALGORITHM);
        // No expiry claim in session tokens, so exp must not be required.
        validation.validate_exp = false;
        validation.required_spec_claims = Default::default();

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Issue a token asserting the given identity.
    pub fn sign(&self, user_id: Uuid, email: &str) -> Result<String, CryptoError> {
        let claims = SessionClaims {
            sub: user_id.to_string(),
            email: email.to_string(),
            iat: Utc::now().timestamp(),
        };

        encode(&Header::new(ALGORITHM), &claims, &self.encoding)
            .map_err(|_| CryptoError::TokenCreation)
    }

    /// Verify a token's signature and return its claims.
    pub fn verify(&self, token: &str) -> Result<SessionClaims, CryptoError> {
        decode::<SessionClaims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| CryptoError::TokenInvalid)
    }
}
