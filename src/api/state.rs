use std::sync::Arc;

use crate::{
    config::Config,
    error::AppResult,
    services::{MetadataProvider, RankingConfig, TmdbProvider},
};

/// Shared application state
///
/// Built once at startup; requests only read from it.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn MetadataProvider>,
    pub ranking: RankingConfig,
}

impl AppState {
    pub fn new(provider: Arc<dyn MetadataProvider>, ranking: RankingConfig) -> Self {
        Self { provider, ranking }
    }

    /// Creates the state backed by the TMDb provider described in `config`
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let provider = TmdbProvider::new(
            config.tmdb_api_key.clone(),
            config.tmdb_api_url.clone(),
            config.retry_policy(),
            config.request_timeout(),
        )?;

        Ok(Self::new(Arc::new(provider), config.ranking()))
    }
}
