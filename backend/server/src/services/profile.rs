/// Profile expansion and profile-picture updates.
use crate::db;
use crate::error::{AppError, Result};
use crate::models::{PostWithLikes, ProfileUser};
use sqlx::PgPool;
use std::collections::HashMap;
use uuid::Uuid;

/// The user's profile with posts (and their liker sets) expanded, in
/// creation order.
///
/// `NotFound` covers the edge case of a record vanishing after token
/// issuance.
pub async fn fetch(pool: &PgPool, user_id: Uuid) -> Result<ProfileUser> {
    let user = db::users::find_by_id(pool, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let posts = db::posts::for_owner(pool, user_id).await?;
    let post_ids: Vec<Uuid> = posts.iter().map(|p| p.id).collect();

    let mut likers: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
    for (post_id, liker) in db::likes::likers_for_posts(pool, &post_ids).await? {
        likers.entry(post_id).or_default().push(liker);
    }

    let posts = posts
        .into_iter()
        .map(|post| {
            let likes = likers.remove(&post.id).unwrap_or_default();
            PostWithLikes::new(post, likes)
        })
        .collect();

    Ok(ProfileUser {
        id: user.id,
        username: user.username,
        email: user.email,
        name: user.name,
        age: user.age,
        profile_pic: user.profile_pic,
        posts,
    })
}

/// Store a new profile-picture reference on the user record.
pub async fn set_picture(pool: &PgPool, user_id: Uuid, filename: &str) -> Result<String> {
    if !db::users::set_profile_pic(pool, user_id, filename).await? {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    Ok(filename.to_string())
}
