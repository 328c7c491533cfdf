use crate::config::FredConfig;
use crate::error::AppError;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Passthrough client for the macroeconomic observations API. Independent of
/// the movie pipeline; the configured series is fetched and returned verbatim.
#[derive(Clone)]
pub struct FredClient {
    client: Client,
    api_key: String,
    base_url: String,
    series_id: String,
}

impl FredClient {
    pub fn new(config: &FredConfig) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            series_id: config.series_id.clone(),
        }
    }

    pub async fn series_observations(&self) -> Result<Value, AppError> {
        let url = format!("{}/series/observations", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("series_id", self.series_id.as_str()),
                ("api_key", self.api_key.as_str()),
                ("file_type", "json"),
            ])
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }
}
