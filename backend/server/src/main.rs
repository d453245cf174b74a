/// Ripple server entry point.
///
/// Wires configuration, the PostgreSQL pool, the session-token codec, and
/// the HTTP server together. Uploaded profile pictures are served
/// statically from the uploads directory.
use actix_cors::Cors;
use actix_files::Files;
use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use auth_crypto::TokenCodec;
use ripple_server::{routes, Config};
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    if cfg!(debug_assertions) {
        dotenvy::dotenv().ok();
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;

    tracing::info!("starting ripple-server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("environment: {}", config.app.env);

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(Duration::from_secs(config.database.acquire_timeout))
        .connect(&config.database.url)
        .await
        .context("Failed to connect to PostgreSQL")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("database migrations completed");

    tokio::fs::create_dir_all(&config.uploads.dir)
        .await
        .context("Failed to create uploads directory")?;

    let codec = web::Data::new(TokenCodec::from_secret(&config.session.secret));
    let pool_data = web::Data::new(pool);
    let config_data = web::Data::new(config.clone());

    let bind_address = format!("{}:{}", config.app.host, config.app.port);
    tracing::info!("starting HTTP server at {}", bind_address);

    HttpServer::new(move || {
        let mut cors = Cors::default()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);
        let mut any_origin = false;
        for origin in config.app.allowed_origins.split(',') {
            let origin = origin.trim();
            if origin == "*" {
                any_origin = true;
                cors = cors.allow_any_origin();
            } else {
                cors = cors.allowed_origin(origin);
            }
        }
        // Cookies require credentialed CORS, which a wildcard origin forbids.
        if !any_origin {
            cors = cors.supports_credentials();
        }

        App::new()
            .app_data(pool_data.clone())
            .app_data(config_data.clone())
            .app_data(codec.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(tracing_actix_web::TracingLogger::default())
            .service(Files::new("/images/uploads", config.uploads.dir.clone()))
            .service(routes::api(codec.clone()))
    })
    .client_request_timeout(Duration::from_secs(30))
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run()
    .await
    .context("HTTP server error")
}
