/// Business logic layer.
///
/// - `auth`: registration, login, and session issuance
/// - `posts`: post lifecycle and like toggling
/// - `profile`: profile expansion and profile-picture updates
pub mod auth;
pub mod posts;
pub mod profile;
