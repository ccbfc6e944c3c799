use serde::Deserialize;
use std::time::Duration;

use crate::services::{ranking::RankingConfig, retry::RetryPolicy};

/// Port the add-on listens on
pub const LISTEN_PORT: u16 = 7000;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// TMDb v3 API key
    pub tmdb_api_key: String,

    /// TMDb API base URL
    #[serde(default = "default_tmdb_api_url")]
    pub tmdb_api_url: String,

    /// Candidates with fewer votes are dropped
    #[serde(default = "default_min_vote_count")]
    pub min_vote_count: u64,

    /// Maximum number of streams returned per request
    #[serde(default = "default_max_recommendations")]
    pub max_recommendations: usize,

    /// Retries after the first failed TMDb call
    #[serde(default = "default_tmdb_max_retries")]
    pub tmdb_max_retries: u32,

    /// Delay before the first retry, doubled on every subsequent one
    #[serde(default = "default_tmdb_retry_backoff_ms")]
    pub tmdb_retry_backoff_ms: u64,

    /// Timeout for a single TMDb request attempt
    #[serde(default = "default_tmdb_request_timeout_secs")]
    pub tmdb_request_timeout_secs: u64,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,
}

fn default_tmdb_api_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_min_vote_count() -> u64 {
    50
}

fn default_max_recommendations() -> usize {
    30
}

fn default_tmdb_max_retries() -> u32 {
    3
}

fn default_tmdb_retry_backoff_ms() -> u64 {
    500
}

fn default_tmdb_request_timeout_secs() -> u64 {
    10
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let config = envy::from_env::<Config>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.tmdb_api_key.trim().is_empty() {
            anyhow::bail!("TMDB_API_KEY must not be blank");
        }
        Ok(())
    }

    pub fn ranking(&self) -> RankingConfig {
        RankingConfig {
            min_vote_count: self.min_vote_count,
            max_results: self.max_recommendations,
        }
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_retries: self.tmdb_max_retries,
            initial_backoff: Duration::from_millis(self.tmdb_retry_backoff_ms),
            ..RetryPolicy::default()
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.tmdb_request_timeout_secs)
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, LISTEN_PORT)
    }
}
