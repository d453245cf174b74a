/// Post lifecycle and like toggling.
use crate::db;
use crate::error::{AppError, Result};
use crate::models::{Post, PostDetail, PostWithLikes};
use sqlx::PgPool;
use uuid::Uuid;

/// Result of a like toggle: the new count and the requester's membership.
#[derive(Debug, Clone, Copy)]
pub struct LikeOutcome {
    pub likes: i64,
    pub is_liked: bool,
}

fn ensure_content(content: &str) -> Result<()> {
    if content.trim().is_empty() {
        return Err(AppError::InvalidArgument("Content is required".to_string()));
    }
    Ok(())
}

/// Create a post owned by `owner_id`.
pub async fn create(pool: &PgPool, owner_id: Uuid, content: &str) -> Result<Post> {
    ensure_content(content)?;
    db::posts::insert(pool, owner_id, content).await
}

/// A post with its owner expanded and its liker set attached.
pub async fn detail(pool: &PgPool, post_id: Uuid) -> Result<PostDetail> {
    let post = db::posts::find_by_id(pool, post_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

    // The owner FK makes a missing owner a store inconsistency, not a 404.
    let owner = db::users::find_by_id(pool, post.user_id)
        .await?
        .ok_or_else(|| AppError::Internal(format!("owner missing for post {}", post.id)))?;

    let likes = db::likes::likers_for_post(pool, post_id).await?;

    Ok(PostDetail {
        id: post.id,
        user: owner.summary(),
        content: post.content,
        likes,
        created_at: post.created_at,
    })
}

/// Overwrite a post's content on behalf of `requester_id`.
///
/// A missing post and a post owned by someone else produce the same
/// `NotFound`, so non-owners learn nothing about the post's existence.
pub async fn update(
    pool: &PgPool,
    post_id: Uuid,
    requester_id: Uuid,
    content: &str,
) -> Result<PostWithLikes> {
    ensure_content(content)?;

    let post = db::posts::update_content(pool, post_id, requester_id, content)
        .await?
        .ok_or_else(|| AppError::NotFound("Post not found or unauthorized".to_string()))?;

    let likes = db::likes::likers_for_post(pool, post_id).await?;

    Ok(PostWithLikes::new(post, likes))
}

/// Delete a post on behalf of `requester_id`, with the same collapsed
/// ownership signal as `update`.
pub async fn remove(pool: &PgPool, post_id: Uuid, requester_id: Uuid) -> Result<()> {
    if !db::posts::delete_owned(pool, post_id, requester_id).await? {
        return Err(AppError::NotFound(
            "Post not found or unauthorized".to_string(),
        ));
    }
    Ok(())
}

/// Flip `user_id`'s membership in the post's liker set.
///
/// Runs in one transaction holding a row lock on the post, so concurrent
/// toggles serialize and a double toggle restores the original state.
pub async fn toggle_like(pool: &PgPool, post_id: Uuid, user_id: Uuid) -> Result<LikeOutcome> {
    let mut tx = pool.begin().await?;

    if !db::posts::lock_for_toggle(&mut tx, post_id).await? {
        return Err(AppError::NotFound("Post not found".to_string()));
    }

    let removed = db::likes::remove(&mut tx, post_id, user_id).await?;
    if !removed {
        db::likes::add(&mut tx, post_id, user_id).await?;
    }

    let likes = db::likes::count(&mut tx, post_id).await?;

    tx.commit().await?;

    Ok(LikeOutcome {
        likes,
        is_liked: !removed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_content_is_rejected() {
        assert!(ensure_content("").is_err());
        assert!(ensure_content("   \n\t ").is_err());
        assert!(ensure_content("hello").is_ok());
        assert!(ensure_content("  hello  ").is_ok());
    }
}
