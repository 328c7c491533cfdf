use chrono::{Datelike, Utc};
use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub tmdb: TmdbConfig,
    pub fred: FredConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TmdbConfig {
    pub api_key: String,
    pub base_url: String,
    /// First year included in the aggregation range; the range always ends
    /// at the current calendar year.
    pub start_year: i32,
    /// Per-year cutoff applied to discovery results before detail lookups.
    pub top_n: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FredConfig {
    pub api_key: String,
    pub base_url: String,
    pub series_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            tmdb: TmdbConfig {
                api_key: String::new(),
                base_url: "https://api.themoviedb.org/3".to_string(),
                start_year: 2000,
                top_n: 10,
            },
            fred: FredConfig {
                api_key: String::new(),
                base_url: "https://api.stlouisfed.org/fred".to_string(),
                series_id: "GDP".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder =
            ConfigBuilder::builder().add_source(config::Config::try_from(&Config::default())?);

        if Path::new("config.yaml").exists() {
            builder = builder.add_source(File::with_name("config"));
        }

        builder = builder.add_source(
            Environment::with_prefix("BOXOFFICE")
                .prefix_separator("_")
                .separator("__"),
        );

        builder.build()?.try_deserialize()
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let builder = ConfigBuilder::builder()
            .add_source(config::Config::try_from(&Config::default())?)
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("BOXOFFICE")
                    .prefix_separator("_")
                    .separator("__"),
            );

        builder.build()?.try_deserialize()
    }

    /// Credential and range checks, run before the server binds. Missing API
    /// keys fail here instead of surfacing as empty results at request time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tmdb.api_key.is_empty() {
            return Err(ConfigError::Message(
                "tmdb.api_key is required (set BOXOFFICE_TMDB__API_KEY)".to_string(),
            ));
        }
        if self.fred.api_key.is_empty() {
            return Err(ConfigError::Message(
                "fred.api_key is required (set BOXOFFICE_FRED__API_KEY)".to_string(),
            ));
        }
        if self.tmdb.top_n == 0 {
            return Err(ConfigError::Message(
                "tmdb.top_n must be at least 1".to_string(),
            ));
        }
        let current = current_year();
        if self.tmdb.start_year > current {
            return Err(ConfigError::Message(format!(
                "tmdb.start_year {} is after the current year {}",
                self.tmdb.start_year, current
            )));
        }
        Ok(())
    }
}

pub fn current_year() -> i32 {
    Utc::now().year()
}
