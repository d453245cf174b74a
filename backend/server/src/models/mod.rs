/// Data models: database rows, request payloads, and response projections.
pub mod post;
pub mod user;

pub use post::{CreatePostRequest, Post, PostDetail, PostWithLikes, UpdatePostRequest};
pub use user::{LoginRequest, ProfileUser, PublicUser, RegisterRequest, User, UserSummary};
