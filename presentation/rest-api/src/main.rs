use dotenvy::dotenv;

mod api;
mod config;
mod images;
mod setup;
#[cfg(test)]
mod test_support;
mod web;

use config::{app_config::AppConfig, database_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Best Store entry point
///
/// Initializes the application, wires dependencies, and starts the HTTP server.
/// - config/: Environment-driven configuration (server, storage, database)
/// - setup/: Dependency injection and server setup
/// - api/: JSON endpoints documented with OpenAPI
/// - web/: Server-rendered product pages and forms
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables, RUST_LOG included
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Initialize database
    let pool = database_config::init_database().await?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(pool, &config.storage);

    // 6. Run server
    Server::run(config, container).await?;

    Ok(())
}
