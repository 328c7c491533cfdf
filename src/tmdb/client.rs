use crate::config::TmdbConfig;
use crate::error::AppError;
use crate::tmdb::{DiscoverEntry, DiscoverPage, MovieDetails, MovieMetadata};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// TMDB HTTP client. One reqwest client is shared across all requests; the
/// per-request timeout bounds every upstream call.
#[derive(Clone)]
pub struct TmdbClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl TmdbClient {
    pub fn new(config: &TmdbConfig) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl MovieMetadata for TmdbClient {
    async fn discover_top_revenue(&self, year: i32) -> Result<Vec<DiscoverEntry>, AppError> {
        let url = format!("{}/discover/movie", self.base_url);
        let year_param = year.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("language", "en-US"),
                ("sort_by", "revenue.desc"),
                ("primary_release_year", year_param.as_str()),
                ("page", "1"),
            ])
            .send()
            .await?
            .error_for_status()?;

        let page: DiscoverPage = response.json().await?;
        Ok(page.results)
    }

    async fn movie_details(&self, movie_id: u64) -> Result<MovieDetails, AppError> {
        let url = format!("{}/movie/{}", self.base_url, movie_id);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("language", "en-US"),
            ])
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }
}
