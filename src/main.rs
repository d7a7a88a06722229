use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use team_api::{config::Config, router, TeamStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting team api server...");

    dotenvy::dotenv().ok();

    let config = Config::from_env().expect("Invalid configuration");

    if config.secret_key.is_none() {
        tracing::warn!("SECRET_KEY is not set");
    }

    let options = SqliteConnectOptions::from_str(&config.database_url)
        .expect("DATABASE_URL is not a valid SQLite URL")
        .create_if_missing(config.create_schema);

    let pool = SqlitePool::connect_with(options)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Database connection established.");

    let store = TeamStore::new(pool);

    if config.create_schema {
        store
            .create_schema()
            .await
            .expect("Failed to create database schema");
        tracing::info!("Database schema ready.");
    }

    let addr = config.addr();
    let app = router(store);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await
        .expect("Failed to start server.");
}
