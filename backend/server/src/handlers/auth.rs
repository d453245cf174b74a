/// Authentication handlers.
use actix_web::cookie::{Cookie, SameSite};
use actix_web::{web, HttpResponse};
use auth_crypto::TokenCodec;
use serde::Serialize;
use sqlx::PgPool;

use crate::error::Result;
use crate::middleware::{SessionUser, SESSION_COOKIE};
use crate::models::{LoginRequest, PublicUser, RegisterRequest, UserSummary};
use crate::services;

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
    pub user: PublicUser,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub user: UserSummary,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct CheckAuthResponse {
    pub success: bool,
    #[serde(rename = "isAuthenticated")]
    pub is_authenticated: bool,
    pub user: UserSummary,
}

/// Session cookie carrying a freshly issued token.
fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish()
}

/// Expired cookie instructing the client to discard its token.
fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(SESSION_COOKIE, "")
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish();
    cookie.make_removal();
    cookie
}

/// POST /api/register
pub async fn register(
    pool: web::Data<PgPool>,
    codec: web::Data<TokenCodec>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse> {
    let (user, token) = services::auth::register(&pool, &codec, payload.into_inner()).await?;

    Ok(HttpResponse::Ok()
        .cookie(session_cookie(token))
        .json(RegisterResponse {
            success: true,
            message: "User registered successfully".to_string(),
            user,
        }))
}

/// POST /api/login
pub async fn login(
    pool: web::Data<PgPool>,
    codec: web::Data<TokenCodec>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse> {
    let (user, token) = services::auth::login(&pool, &codec, payload.into_inner()).await?;

    Ok(HttpResponse::Ok()
        .cookie(session_cookie(token))
        .json(LoginResponse {
            success: true,
            message: "Login successful".to_string(),
            user,
        }))
}

/// POST /api/logout
///
/// Tokens are stateless, so logout only clears the client-held cookie.
pub async fn logout() -> HttpResponse {
    HttpResponse::Ok()
        .cookie(removal_cookie())
        .json(MessageResponse {
            success: true,
            message: "Logged out successfully".to_string(),
        })
}

/// GET /api/check-auth
pub async fn check_auth(
    pool: web::Data<PgPool>,
    session: SessionUser,
) -> Result<HttpResponse> {
    let user = services::auth::current_user(&pool, session.user_id).await?;

    Ok(HttpResponse::Ok().json(CheckAuthResponse {
        success: true,
        is_authenticated: true,
        user,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_cookie_is_http_only_lax() {
        let cookie = session_cookie("tok".to_string());

        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), "tok");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.path(), Some("/"));
    }

    #[test]
    fn removal_cookie_expires_immediately() {
        let cookie = removal_cookie();

        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), "");
        // A removal cookie must carry an elapsed Max-Age.
        assert_eq!(cookie.max_age(), Some(actix_web::cookie::time::Duration::ZERO));
    }
}
