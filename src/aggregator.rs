use crate::tmdb::MovieMetadata;
use futures::future::join_all;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// One movie in a year's top list, assembled from a discovery entry plus its
/// detail lookup.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MovieRecord {
    pub title: String,
    pub revenue: u64,
    pub release_date: String,
    pub genres: Vec<String>,
}

/// Year -> top movies for that year, ordered by descending revenue and
/// truncated to the configured cutoff. Every requested year has an entry,
/// possibly empty.
pub type YearlyTopMovies = BTreeMap<i32, Vec<MovieRecord>>;

/// Multi-year aggregation over an upstream movie-metadata source.
///
/// Upstream failures are contained at the granularity where they occur: a
/// failed discovery degrades that year to an empty list, a failed detail
/// lookup drops that single movie. Neither aborts the multi-year run.
pub struct Aggregator {
    source: Arc<dyn MovieMetadata>,
    top_n: usize,
}

impl Aggregator {
    pub fn new(source: Arc<dyn MovieMetadata>, top_n: usize) -> Self {
        Self { source, top_n }
    }

    /// Top movies for one release year: discovery (already sorted by
    /// descending revenue upstream), truncated to the cutoff, then one
    /// concurrent detail lookup per entry. All lookups are awaited; failed
    /// ones are dropped from the result without affecting their siblings.
    pub async fn top_movies_for_year(&self, year: i32) -> Vec<MovieRecord> {
        let entries = match self.source.discover_top_revenue(year).await {
            Ok(entries) => entries,
            Err(err) => {
                warn!(year, error = %err, "discovery failed, returning empty year");
                return Vec::new();
            }
        };

        let lookups = entries.iter().take(self.top_n).map(|entry| {
            let source = Arc::clone(&self.source);
            let movie_id = entry.id;
            async move {
                match source.movie_details(movie_id).await {
                    Ok(details) => Some(MovieRecord {
                        title: details.title,
                        revenue: details.revenue,
                        release_date: details.release_date,
                        genres: details.genres.into_iter().map(|g| g.name).collect(),
                    }),
                    Err(err) => {
                        warn!(movie_id, year, error = %err, "detail lookup failed, dropping entry");
                        None
                    }
                }
            }
        });

        let records: Vec<MovieRecord> = join_all(lookups).await.into_iter().flatten().collect();
        debug!(year, count = records.len(), "aggregated year");
        records
    }

    /// Aggregate every year in the inclusive range, one year at a time. The
    /// returned map covers the full range even when individual years came
    /// back empty.
    pub async fn all_years(&self, start_year: i32, end_year: i32) -> YearlyTopMovies {
        let mut all_movies = YearlyTopMovies::new();
        for year in start_year..=end_year {
            let movies = self.top_movies_for_year(year).await;
            all_movies.insert(year, movies);
        }
        all_movies
    }
}
