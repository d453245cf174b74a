use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::user::UserSummary;

/// Post row.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Post {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Post with its liker set, as embedded in profile and mutation responses.
#[derive(Debug, Serialize)]
pub struct PostWithLikes {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    /// User ids currently liking this post (membership, not a counter)
    pub likes: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl PostWithLikes {
    pub fn new(post: Post, likes: Vec<Uuid>) -> Self {
        Self {
            id: post.id,
            user_id: post.user_id,
            content: post.content,
            likes,
            created_at: post.created_at,
        }
    }
}

/// Post with its owner expanded to public fields.
#[derive(Debug, Serialize)]
pub struct PostDetail {
    pub id: Uuid,
    pub user: UserSummary,
    pub content: String,
    pub likes: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePostRequest {
    pub content: String,
}
