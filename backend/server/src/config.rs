//! Configuration management.
//!
//! Settings are loaded from environment variables; a `.env` file is read in
//! debug builds. The session-signing secret has no default and must be
//! provided by the environment.
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub app: AppSettings,
    pub database: DatabaseSettings,
    pub session: SessionSettings,
    pub uploads: UploadSettings,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Config {
            app: AppSettings::from_env()?,
            database: DatabaseSettings::from_env()?,
            session: SessionSettings::from_env()?,
            uploads: UploadSettings::from_env()?,
        })
    }
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Application environment (development, staging, production)
    pub env: String,
    /// Server host to bind to
    pub host: String,
    /// Server port to bind to
    pub port: u16,
    /// Comma-separated list of allowed CORS origins
    pub allowed_origins: String,
}

impl AppSettings {
    fn from_env() -> Result<Self> {
        Ok(Self {
            env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("Invalid SERVER_PORT")?,
            allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:5173,http://localhost:5174".to_string()),
        })
    }
}

/// Database connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: u64,
}

impl DatabaseSettings {
    fn from_env() -> Result<Self> {
        Ok(Self {
            url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .context("Invalid DATABASE_MAX_CONNECTIONS")?,
            acquire_timeout: env::var("DATABASE_ACQUIRE_TIMEOUT")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .context("Invalid DATABASE_ACQUIRE_TIMEOUT")?,
        })
    }
}

/// Session-token settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSettings {
    /// HS256 signing secret for session tokens
    pub secret: String,
}

impl SessionSettings {
    fn from_env() -> Result<Self> {
        Ok(Self {
            secret: env::var("JWT_SECRET").context("JWT_SECRET must be set")?,
        })
    }
}

/// Profile-picture upload settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadSettings {
    /// Directory uploaded images are written to and served from
    pub dir: String,
    /// Maximum accepted upload size in bytes
    pub max_bytes: usize,
}

impl UploadSettings {
    fn from_env() -> Result<Self> {
        Ok(Self {
            dir: env::var("UPLOADS_DIR")
                .unwrap_or_else(|_| "public/images/uploads".to_string()),
            max_bytes: env::var("UPLOAD_MAX_BYTES")
                .unwrap_or_else(|_| "5242880".to_string())
                .parse()
                .context("Invalid UPLOAD_MAX_BYTES")?,
        })
    }
}
