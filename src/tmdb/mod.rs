pub mod client;
pub mod mock;

pub use client::TmdbClient;

use crate::error::AppError;
use async_trait::async_trait;
use serde::Deserialize;

/// One entry from a discovery page. The listing carries only minimal
/// metadata; revenue and genres require a follow-up detail lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct DiscoverEntry {
    pub id: u64,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct DiscoverPage {
    #[serde(default)]
    pub results: Vec<DiscoverEntry>,
}

/// Full metadata for a single movie id. Revenue is absent from some upstream
/// records and defaults to 0.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieDetails {
    pub title: String,
    #[serde(default)]
    pub revenue: u64,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub genres: Vec<Genre>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Genre {
    pub name: String,
}

/// Upstream movie-metadata source. The aggregator depends on this trait so
/// tests can substitute a mock for the TMDB HTTP client.
#[async_trait]
pub trait MovieMetadata: Send + Sync {
    /// Discovery query: movies for the given release year, sorted by
    /// descending revenue, first page only.
    async fn discover_top_revenue(&self, year: i32) -> Result<Vec<DiscoverEntry>, AppError>;

    /// Detail lookup for a single movie id.
    async fn movie_details(&self, movie_id: u64) -> Result<MovieDetails, AppError>;
}
