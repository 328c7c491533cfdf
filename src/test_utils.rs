use crate::{
    aggregator::Aggregator,
    config::FredConfig,
    fred::FredClient,
    server::{AppState, build_router},
    tmdb::mock::MockMetadata,
};
use axum::Router;
use std::sync::Arc;

/// Test router builder over the mock metadata source.
///
/// The observations client points at an unroutable loopback port, so tests
/// hitting /api/fred exercise the upstream-failure mapping rather than the
/// network.
pub struct TestAppBuilder {
    metadata: MockMetadata,
    start_year: i32,
    top_n: usize,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self {
            metadata: MockMetadata::new(),
            start_year: 2020,
            top_n: 10,
        }
    }

    pub fn with_metadata(mut self, metadata: MockMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn with_start_year(mut self, start_year: i32) -> Self {
        self.start_year = start_year;
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn build(self) -> Router {
        let fred_config = FredConfig {
            api_key: "test-key".to_string(),
            base_url: "http://127.0.0.1:9".to_string(),
            series_id: "GDP".to_string(),
        };
        let state = AppState {
            aggregator: Arc::new(Aggregator::new(Arc::new(self.metadata), self.top_n)),
            fred: Arc::new(FredClient::new(&fred_config)),
            start_year: self.start_year,
        };
        build_router(state)
    }
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}
