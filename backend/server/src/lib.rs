/// Ripple Server Library
///
/// A small social-posting service: users register, log in, upload a profile
/// picture, and create, edit, delete, and like short text posts.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers
/// - `models`: Row types and request/response payloads
/// - `services`: Business logic layer (auth, posts, profile)
/// - `db`: Database access layer
/// - `middleware`: Cookie session guard
/// - `routes`: The `/api` route tree
/// - `error`: Error types and HTTP mapping
/// - `config`: Configuration management
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
