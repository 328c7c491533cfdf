use crate::{
    aggregator::Aggregator,
    config::Config,
    error::AppError,
    fred::FredClient,
    routes::{create_fred_routes, create_health_routes, create_movie_routes},
    tmdb::{MovieMetadata, TmdbClient},
};
use axum::Router;
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::info;

/// Shared request state: the movie aggregator, the observations passthrough
/// client, and the first year of the aggregation range.
#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<Aggregator>,
    pub fred: Arc<FredClient>,
    pub start_year: i32,
}

pub struct Server {
    config: Config,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub async fn run(&self) -> Result<(), AppError> {
        let metadata: Arc<dyn MovieMetadata> = Arc::new(TmdbClient::new(&self.config.tmdb));
        let state = AppState {
            aggregator: Arc::new(Aggregator::new(metadata, self.config.tmdb.top_n)),
            fred: Arc::new(FredClient::new(&self.config.fred)),
            start_year: self.config.tmdb.start_year,
        };

        let app = build_router(state);

        let addr: SocketAddr = format!("{}:{}", self.config.server.host, self.config.server.port)
            .parse()
            .map_err(|e| AppError::Internal(format!("Invalid listen address: {}", e)))?;
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to bind to address: {}", e)))?;

        info!("Server listening on http://{}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| AppError::Internal(format!("Server error: {}", e)))?;

        Ok(())
    }
}

/// Route layout mirrors the upstream areas: movie aggregation under
/// /api/top-movies, the observations passthrough under /api/fred.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/top-movies", create_movie_routes())
        .nest("/api/fred", create_fred_routes())
        .nest("/health", create_health_routes())
        .with_state(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install shutdown signal handler: {}", e);
    }
    info!("Shutdown signal received");
}
