/// Error types for the Ripple server.
///
/// Every failure a handler can produce maps onto a small taxonomy:
/// invalid input and duplicate registration are 400, missing or bad
/// credentials are 401, and "not found" deliberately covers both a missing
/// post and a post owned by someone else so that non-owners learn nothing.
/// Store and primitive failures are 500 with a generic body; the underlying
/// error is logged, never surfaced.
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use thiserror::Error;

/// Result type for server operations
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed or missing input
    #[error("{0}")]
    InvalidArgument(String),

    /// Duplicate resource (already-registered email, taken username)
    #[error("{0}")]
    Conflict(String),

    /// Missing, malformed, or unverifiable credentials
    #[error("{0}")]
    Unauthorized(String),

    /// Absent resource, or one the requester may not touch
    #[error("{0}")]
    NotFound(String),

    /// Database operation failed
    #[error("database error: {0}")]
    Database(String),

    /// Anything else unexpected
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Message safe to return to the client.
    fn public_message(&self) -> String {
        match self {
            AppError::Database(_) | AppError::Internal(_) => {
                "Internal server error".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidArgument(_) | AppError::Conflict(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code() == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("request failed: {}", self);
        }

        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "success": false,
            "message": self.public_message(),
        }))
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("database error: {}", err);
        AppError::Database(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::InvalidArgument(err.to_string())
    }
}

impl From<auth_crypto::CryptoError> for AppError {
    fn from(err: auth_crypto::CryptoError) -> Self {
        match err {
            auth_crypto::CryptoError::TokenInvalid => {
                AppError::Unauthorized("Invalid token".to_string())
            }
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_taxonomy() {
        assert_eq!(
            AppError::InvalidArgument("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Conflict("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Unauthorized("x".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Database("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Internal("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn internal_details_are_not_surfaced() {
        let err = AppError::Database("connection refused on 10.0.0.3".into());
        assert_eq!(err.public_message(), "Internal server error");

        let err = AppError::NotFound("Post not found".into());
        assert_eq!(err.public_message(), "Post not found");
    }

    #[test]
    fn invalid_token_maps_to_unauthorized() {
        let err: AppError = auth_crypto::CryptoError::TokenInvalid.into();
        assert!(matches!(err, AppError::Unauthorized(_)));

        let err: AppError = auth_crypto::CryptoError::TokenCreation.into();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
