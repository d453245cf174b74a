use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::models::post::PostWithLikes;

/// User row - core identity entity.
///
/// The password hash never leaves this type; responses use the projections
/// below.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub name: String,
    pub age: i32,
    pub password_hash: String,
    pub profile_pic: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Projection returned on registration.
    pub fn public(&self) -> PublicUser {
        PublicUser {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            name: self.name.clone(),
        }
    }

    /// Projection with the profile picture, returned on login and check-auth.
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            name: self.name.clone(),
            profile_pic: self.profile_pic.clone(),
        }
    }
}

/// Public user fields
#[derive(Debug, Clone, Serialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub name: String,
}

/// Public user fields plus the profile-picture reference
#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub name: String,
    #[serde(rename = "profilepic")]
    pub profile_pic: String,
}

/// The authenticated user with their posts expanded, in creation order.
#[derive(Debug, Serialize)]
pub struct ProfileUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub name: String,
    pub age: i32,
    #[serde(rename = "profilepic")]
    pub profile_pic: String,
    pub posts: Vec<PostWithLikes>,
}

/// Registration payload
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[validate(email(message = "invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(range(min = 0, message = "age must not be negative"))]
    pub age: i32,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Login payload
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
