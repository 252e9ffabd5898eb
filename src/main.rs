use ghprofile_rs::server::{self, Config};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file (if exists)
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match dotenv {
        Ok(path) => info!("Loaded environment variables from {}", path.display()),
        Err(_) => info!("No .env file found, using system environment variables"),
    }

    let config = Config::from_env();
    info!(
        ttl_secs = config.cache_ttl.as_secs(),
        default_login = config.default_login.as_deref().unwrap_or("octocat"),
        "Starting GitHub profile proxy..."
    );

    if let Err(e) = server::serve(config).await {
        tracing::error!("server error: {e}");
        std::process::exit(1);
    }
}
