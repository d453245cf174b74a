/// Registration, login, and session issuance.
use crate::db;
use crate::error::{AppError, Result};
use crate::models::{LoginRequest, PublicUser, RegisterRequest, UserSummary};
use auth_crypto::TokenCodec;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// Register a new account and issue a session token.
///
/// Fails with `Conflict` when the email is already registered; the returned
/// projection never includes the password hash.
pub async fn register(
    pool: &PgPool,
    codec: &TokenCodec,
    req: RegisterRequest,
) -> Result<(PublicUser, String)> {
    req.validate()?;

    if db::users::email_exists(pool, &req.email).await? {
        return Err(AppError::Conflict("User already registered".to_string()));
    }

    let password_hash = auth_crypto::hash_password(&req.password)?;

    let user = db::users::create_user(
        pool,
        &req.username,
        &req.email,
        &req.name,
        req.age,
        &password_hash,
    )
    .await?;

    let token = codec.sign(user.id, &user.email)?;

    Ok((user.public(), token))
}

/// Verify credentials and issue a session token.
///
/// Unknown email and wrong password are indistinguishable to the caller.
pub async fn login(
    pool: &PgPool,
    codec: &TokenCodec,
    req: LoginRequest,
) -> Result<(UserSummary, String)> {
    let user = db::users::find_by_email(pool, &req.email)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Invalid email or password".to_string()))?;

    if !auth_crypto::verify_password(&req.password, &user.password_hash)? {
        return Err(AppError::Unauthorized(
            "Invalid email or password".to_string(),
        ));
    }

    let token = codec.sign(user.id, &user.email)?;

    Ok((user.summary(), token))
}

/// Resolve a verified session back to its user record.
pub async fn current_user(pool: &PgPool, user_id: Uuid) -> Result<UserSummary> {
    let user = db::users::find_by_id(pool, user_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Unauthorized".to_string()))?;

    Ok(user.summary())
}
