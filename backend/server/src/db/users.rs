/// Credential-store operations.
use crate::error::{AppError, Result};
use crate::models::User;
use sqlx::PgPool;
use uuid::Uuid;

/// Insert a new user and return the stored row.
///
/// Unique-constraint violations surface as `Conflict` so that a concurrent
/// duplicate registration loses cleanly even when the up-front existence
/// check raced.
pub async fn create_user(
    pool: &PgPool,
    username: &str,
    email: &str,
    name: &str,
    age: i32,
    password_hash: &str,
) -> Result<User> {
    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, username, email, name, age, password_hash)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(username)
    .bind(email)
    .bind(name)
    .bind(age)
    .bind(password_hash)
    .fetch_one(pool)
    .await
    .map_err(map_unique_violation)?;

    Ok(user)
}

fn map_unique_violation(err: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        match db_err.constraint() {
            Some("users_email_key") => {
                return AppError::Conflict("User already registered".to_string())
            }
            Some("users_username_key") => {
                return AppError::Conflict("Username already taken".to_string())
            }
            _ => {}
        }
    }
    err.into()
}

/// Find user by email
pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await?;

    Ok(user)
}

/// Find user by ID
pub async fn find_by_id(pool: &PgPool, user_id: Uuid) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

    Ok(user)
}

/// Check whether an email is already registered
pub async fn email_exists(pool: &PgPool, email: &str) -> Result<bool> {
    let exists =
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
            .bind(email)
            .fetch_one(pool)
            .await?;

    Ok(exists)
}

/// Store a new profile-picture reference; returns false if the user is gone.
pub async fn set_profile_pic(pool: &PgPool, user_id: Uuid, filename: &str) -> Result<bool> {
    let result = sqlx::query("UPDATE users SET profile_pic = $2 WHERE id = $1")
        .bind(user_id)
        .bind(filename)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
