use crate::error::AppError;
use crate::tmdb::{DiscoverEntry, DiscoverPage, Genre, MovieDetails, MovieMetadata};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::collections::{BTreeMap, HashSet};

/// In-memory movie-metadata source for tests. Serves a fixed catalog and can
/// be told to fail specific discovery years or detail lookups, or to serve a
/// payload that does not decode, so failure containment in the aggregator is
/// testable without a live upstream.
#[derive(Clone, Default)]
pub struct MockMetadata {
    /// year -> entries, already in descending-revenue order.
    catalog: BTreeMap<i32, Vec<MockMovie>>,
    failing_years: HashSet<i32>,
    failing_movie_ids: HashSet<u64>,
    malformed_years: HashSet<i32>,
    malformed_movie_ids: HashSet<u64>,
}

#[derive(Clone)]
struct MockMovie {
    id: u64,
    title: String,
    revenue: u64,
    release_date: String,
    genres: Vec<String>,
}

impl MockMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a movie under a year. Insertion order is served as discovery
    /// order, so callers list movies by descending revenue.
    pub fn with_movie(
        mut self,
        year: i32,
        id: u64,
        title: &str,
        revenue: u64,
        genres: &[&str],
    ) -> Self {
        self.catalog.entry(year).or_default().push(MockMovie {
            id,
            title: title.to_string(),
            revenue,
            release_date: format!("{year}-01-01"),
            genres: genres.iter().map(|g| g.to_string()).collect(),
        });
        self
    }

    /// Discovery requests for this year will fail.
    pub fn with_failing_year(mut self, year: i32) -> Self {
        self.failing_years.insert(year);
        self
    }

    /// Detail lookups for this movie id will fail.
    pub fn with_failing_movie(mut self, id: u64) -> Self {
        self.failing_movie_ids.insert(id);
        self
    }

    /// Discovery responses for this year will be a body that does not decode.
    pub fn with_malformed_year(mut self, year: i32) -> Self {
        self.malformed_years.insert(year);
        self
    }

    /// Detail responses for this movie id will be a body that does not decode.
    pub fn with_malformed_movie(mut self, id: u64) -> Self {
        self.malformed_movie_ids.insert(id);
        self
    }
}

/// Run garbage through the real payload type so the returned error is the
/// same decode failure the HTTP client surfaces for a malformed body.
fn malformed_payload_error<T: DeserializeOwned>() -> AppError {
    match serde_json::from_str::<T>("<!DOCTYPE html><html>Service Unavailable</html>") {
        Ok(_) => AppError::Upstream("mock: garbage payload unexpectedly decoded".to_string()),
        Err(err) => AppError::Upstream(err.to_string()),
    }
}

#[async_trait]
impl MovieMetadata for MockMetadata {
    async fn discover_top_revenue(&self, year: i32) -> Result<Vec<DiscoverEntry>, AppError> {
        if self.failing_years.contains(&year) {
            return Err(AppError::Upstream(format!(
                "mock discovery failure for year {year}"
            )));
        }
        if self.malformed_years.contains(&year) {
            return Err(malformed_payload_error::<DiscoverPage>());
        }

        let entries = self
            .catalog
            .get(&year)
            .map(|movies| {
                movies
                    .iter()
                    .map(|m| DiscoverEntry {
                        id: m.id,
                        title: m.title.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default();
        Ok(entries)
    }

    async fn movie_details(&self, movie_id: u64) -> Result<MovieDetails, AppError> {
        if self.failing_movie_ids.contains(&movie_id) {
            return Err(AppError::Upstream(format!(
                "mock detail failure for movie {movie_id}"
            )));
        }
        if self.malformed_movie_ids.contains(&movie_id) {
            return Err(malformed_payload_error::<MovieDetails>());
        }

        self.catalog
            .values()
            .flatten()
            .find(|m| m.id == movie_id)
            .map(|m| MovieDetails {
                title: m.title.clone(),
                revenue: m.revenue,
                release_date: m.release_date.clone(),
                genres: m
                    .genres
                    .iter()
                    .map(|name| Genre { name: name.clone() })
                    .collect(),
            })
            .ok_or_else(|| AppError::Upstream(format!("mock: no movie with id {movie_id}")))
    }
}
