//! HTTP surface: router, shared state and the standalone serve loop.

pub mod config;
pub mod error;
pub mod handlers;

use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::get,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::core::GhError;
use crate::service::ProfileDataService;

pub use config::Config;
pub use error::ApiError;

/// Server state shared across handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    pub service: ProfileDataService,
}

impl AppState {
    pub fn new(service: ProfileDataService) -> Self {
        Self { service }
    }

    /// Builds the service (upstream client, cache, resolver) from configuration.
    pub fn from_config(config: &Config) -> Result<Self, GhError> {
        let client = config.github_client()?;
        let service =
            ProfileDataService::from_client(client, config.cache_ttl, config.default_login.clone());
        Ok(Self::new(service))
    }
}

/// Build and configure the application router.
pub fn build_router(state: AppState, config: &Config) -> Router {
    Router::new()
        .route(
            "/api/github",
            get(handlers::github_profile).post(handlers::github_profile),
        )
        .route("/health", get(handlers::health_check))
        .fallback(handlers::not_found)
        .layer(cors_layer(&config.allowed_origins))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(error::panic_response))
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }
    let list: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| HeaderValue::from_str(o).ok())
        .collect();
    layer.allow_origin(AllowOrigin::list(list))
}

/// Binds `config.bind_addr()` and serves until Ctrl-C or SIGTERM.
pub async fn serve(config: Config) -> Result<(), std::io::Error> {
    let state = AppState::from_config(&config).map_err(std::io::Error::other)?;
    let router = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!(
        "GitHub proxy running on http://{}/api/github",
        listener.local_addr()?
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received terminate signal");
        },
    }

    info!("Shutting down gracefully...");
}
