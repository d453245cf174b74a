/// Post-store operations.
use crate::error::Result;
use crate::models::Post;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

/// Insert a new post owned by `owner_id`.
///
/// The owner foreign key guarantees the reference resolves to an existing
/// user at creation time.
pub async fn insert(pool: &PgPool, owner_id: Uuid, content: &str) -> Result<Post> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (id, user_id, content)
        VALUES ($1, $2, $3)
        RETURNING id, user_id, content, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(owner_id)
    .bind(content)
    .fetch_one(pool)
    .await?;

    Ok(post)
}

/// Find a post by ID
pub async fn find_by_id(pool: &PgPool, post_id: Uuid) -> Result<Option<Post>> {
    let post = sqlx::query_as::<_, Post>(
        "SELECT id, user_id, content, created_at FROM posts WHERE id = $1",
    )
    .bind(post_id)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

/// A user's posts in creation order.
pub async fn for_owner(pool: &PgPool, owner_id: Uuid) -> Result<Vec<Post>> {
    let posts = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, user_id, content, created_at
        FROM posts
        WHERE user_id = $1
        ORDER BY created_at ASC
        "#,
    )
    .bind(owner_id)
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// Overwrite a post's content, but only for its owner.
///
/// Returns `None` both when the post does not exist and when it belongs to
/// someone else; callers must not distinguish the two.
pub async fn update_content(
    pool: &PgPool,
    post_id: Uuid,
    owner_id: Uuid,
    content: &str,
) -> Result<Option<Post>> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        UPDATE posts
        SET content = $3
        WHERE id = $1 AND user_id = $2
        RETURNING id, user_id, content, created_at
        "#,
    )
    .bind(post_id)
    .bind(owner_id)
    .bind(content)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

/// Delete a post, but only for its owner. The liker set goes with it via
/// `ON DELETE CASCADE`.
pub async fn delete_owned(pool: &PgPool, post_id: Uuid, owner_id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM posts WHERE id = $1 AND user_id = $2")
        .bind(post_id)
        .bind(owner_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Lock a post row for the duration of a like toggle, serializing
/// concurrent toggles on the same post. Returns false if the post is gone.
pub async fn lock_for_toggle(
    tx: &mut Transaction<'_, Postgres>,
    post_id: Uuid,
) -> Result<bool> {
    let id = sqlx::query_scalar::<_, Uuid>("SELECT id FROM posts WHERE id = $1 FOR UPDATE")
        .bind(post_id)
        .fetch_optional(tx.as_mut())
        .await?;

    Ok(id.is_some())
}
