/// Post handlers.
use actix_web::{web, HttpResponse};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::middleware::SessionUser;
use crate::models::{CreatePostRequest, PostDetail, PostWithLikes, UpdatePostRequest};
use crate::services;

#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub success: bool,
    pub post: PostWithLikes,
}

#[derive(Debug, Serialize)]
pub struct PostDetailResponse {
    pub success: bool,
    pub post: PostDetail,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct LikeResponse {
    pub success: bool,
    pub likes: i64,
    #[serde(rename = "isLiked")]
    pub is_liked: bool,
}

/// Parse a path id, treating anything that is not a UUID as an absent post
/// so that malformed ids and missing posts are indistinguishable.
fn parse_post_id(raw: &str, message: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound(message.to_string()))
}

/// POST /api/post
pub async fn create_post(
    pool: web::Data<PgPool>,
    session: SessionUser,
    payload: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    let post = services::posts::create(&pool, session.user_id, &payload.content).await?;

    Ok(HttpResponse::Ok().json(PostResponse {
        success: true,
        post: PostWithLikes::new(post, Vec::new()),
    }))
}

/// GET /api/post/{id}
pub async fn get_post(
    pool: web::Data<PgPool>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let post_id = parse_post_id(&path, "Post not found")?;
    let post = services::posts::detail(&pool, post_id).await?;

    Ok(HttpResponse::Ok().json(PostDetailResponse {
        success: true,
        post,
    }))
}

/// PUT /api/post/{id}
pub async fn update_post(
    pool: web::Data<PgPool>,
    session: SessionUser,
    path: web::Path<String>,
    payload: web::Json<UpdatePostRequest>,
) -> Result<HttpResponse> {
    let post_id = parse_post_id(&path, "Post not found or unauthorized")?;
    let post =
        services::posts::update(&pool, post_id, session.user_id, &payload.content).await?;

    Ok(HttpResponse::Ok().json(PostResponse {
        success: true,
        post,
    }))
}

/// DELETE /api/post/{id}
pub async fn delete_post(
    pool: web::Data<PgPool>,
    session: SessionUser,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let post_id = parse_post_id(&path, "Post not found or unauthorized")?;
    services::posts::remove(&pool, post_id, session.user_id).await?;

    Ok(HttpResponse::Ok().json(DeleteResponse {
        success: true,
        message: "Post deleted".to_string(),
    }))
}

/// POST /api/like/{id}
pub async fn toggle_like(
    pool: web::Data<PgPool>,
    session: SessionUser,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let post_id = parse_post_id(&path, "Post not found")?;
    let outcome = services::posts::toggle_like(&pool, post_id, session.user_id).await?;

    Ok(HttpResponse::Ok().json(LikeResponse {
        success: true,
        likes: outcome.likes,
        is_liked: outcome.is_liked,
    }))
}
