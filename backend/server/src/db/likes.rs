/// Liker-set operations.
///
/// The `(post_id, user_id)` primary key keeps the set free of duplicates;
/// the toggle itself runs inside a transaction owned by the service layer.
use crate::error::Result;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

/// User ids liking a post, oldest first.
pub async fn likers_for_post(pool: &PgPool, post_id: Uuid) -> Result<Vec<Uuid>> {
    let likers = sqlx::query_scalar::<_, Uuid>(
        "SELECT user_id FROM likes WHERE post_id = $1 ORDER BY created_at ASC",
    )
    .bind(post_id)
    .fetch_all(pool)
    .await?;

    Ok(likers)
}

/// Liker sets for multiple posts in a single query.
pub async fn likers_for_posts(pool: &PgPool, post_ids: &[Uuid]) -> Result<Vec<(Uuid, Uuid)>> {
    if post_ids.is_empty() {
        return Ok(Vec::new());
    }

    let rows = sqlx::query_as::<_, (Uuid, Uuid)>(
        r#"
        SELECT post_id, user_id
        FROM likes
        WHERE post_id = ANY($1)
        ORDER BY created_at ASC
        "#,
    )
    .bind(post_ids)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Remove a user from a post's liker set; returns whether they were in it.
pub async fn remove(
    tx: &mut Transaction<'_, Postgres>,
    post_id: Uuid,
    user_id: Uuid,
) -> Result<bool> {
    let result = sqlx::query("DELETE FROM likes WHERE post_id = $1 AND user_id = $2")
        .bind(post_id)
        .bind(user_id)
        .execute(tx.as_mut())
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Add a user to a post's liker set.
pub async fn add(
    tx: &mut Transaction<'_, Postgres>,
    post_id: Uuid,
    user_id: Uuid,
) -> Result<()> {
    sqlx::query("INSERT INTO likes (post_id, user_id) VALUES ($1, $2)")
        .bind(post_id)
        .bind(user_id)
        .execute(tx.as_mut())
        .await?;

    Ok(())
}

/// Current size of a post's liker set.
pub async fn count(tx: &mut Transaction<'_, Postgres>, post_id: Uuid) -> Result<i64> {
    let count =
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM likes WHERE post_id = $1")
            .bind(post_id)
            .fetch_one(tx.as_mut())
            .await?;

    Ok(count)
}
