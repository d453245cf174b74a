/// Database access layer.
///
/// `users` is the credential store; `posts` and `likes` together form the
/// post store. All queries are runtime-checked `sqlx` calls against
/// PostgreSQL.
pub mod likes;
pub mod posts;
pub mod users;
