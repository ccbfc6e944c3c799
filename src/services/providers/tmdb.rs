/// TMDb v3 API provider
///
/// API Flow:
/// 1. Resolve: /find/{imdb_id}?external_source=imdb_id → TMDb id
/// 2. Source: /{movie|tv}/{id} → popularity baseline
/// 3. Candidates: /{movie|tv}/{id}/similar and /recommendations, first page only
///
/// Every call carries the `api_key` query parameter and goes through the
/// configured retry policy.
use crate::{
    error::{AppError, AppResult},
    models::{Candidate, CandidatePage, FindResponse, MediaKind, SourceItem},
    services::{providers::MetadataProvider, retry::RetryPolicy},
};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use std::time::Duration;

const FIRST_PAGE: &str = "1";

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    retry_policy: RetryPolicy,
}

impl TmdbProvider {
    pub fn new(
        api_key: String,
        api_url: String,
        retry_policy: RetryPolicy,
        request_timeout: Duration,
    ) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(request_timeout).build()?;

        Ok(Self {
            http_client,
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
            retry_policy,
        })
    }

    /// GET `{api_url}{path}` with retries, decoding the body as `T`
    ///
    /// Only transport failures and non-success statuses are retried; a body
    /// that fails to decode is returned as an error straight away.
    async fn get_json<T: DeserializeOwned>(
        &self,
        operation: &str,
        path: &str,
        params: &[(&str, &str)],
    ) -> AppResult<T> {
        let url = format!("{}{}", self.api_url, path);

        let body = self
            .retry_policy
            .run(operation, || self.get_body(&url, params))
            .await?;

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(operation, error = %e, "Failed to decode TMDb response");
            AppError::Decode(e)
        })
    }

    async fn get_body(&self, url: &str, params: &[(&str, &str)]) -> AppResult<String> {
        tracing::debug!(url = %url, "TMDb request");

        let response = self
            .http_client
            .get(url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(params)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::UpstreamStatus { status, body });
        }

        Ok(response.text().await?)
    }

    async fn fetch_page(
        &self,
        operation: &str,
        id: u64,
        kind: MediaKind,
        list: &str,
    ) -> AppResult<Vec<Candidate>> {
        let path = format!("/{}/{}/{}", kind.tmdb_path(), id, list);
        let page: CandidatePage = self
            .get_json(operation, &path, &[("page", FIRST_PAGE)])
            .await?;

        tracing::debug!(
            tmdb_id = id,
            kind = %kind,
            list,
            results = page.results.len(),
            "Candidate page fetched"
        );

        Ok(page.results)
    }
}

#[async_trait::async_trait]
impl MetadataProvider for TmdbProvider {
    async fn find_by_imdb_id(&self, imdb_id: &str, kind: MediaKind) -> AppResult<Option<u64>> {
        if imdb_id.trim().is_empty() {
            return Err(AppError::InvalidInput("IMDb id cannot be empty".to_string()));
        }

        let path = format!("/find/{}", imdb_id);
        let found: FindResponse = self
            .get_json("find", &path, &[("external_source", "imdb_id")])
            .await?;

        Ok(found.first_id(kind))
    }

    async fn fetch_details(&self, id: u64, kind: MediaKind) -> AppResult<SourceItem> {
        let path = format!("/{}/{}", kind.tmdb_path(), id);
        self.get_json("details", &path, &[]).await
    }

    async fn fetch_similar(&self, id: u64, kind: MediaKind) -> AppResult<Vec<Candidate>> {
        self.fetch_page("similar", id, kind, "similar").await
    }

    async fn fetch_recommendations(&self, id: u64, kind: MediaKind) -> AppResult<Vec<Candidate>> {
        self.fetch_page("recommendations", id, kind, "recommendations")
            .await
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_provider(api_url: &str) -> TmdbProvider {
        TmdbProvider::new(
            "test_key".to_string(),
            api_url.to_string(),
            RetryPolicy::none(),
            Duration::from_secs(1),
        )
        .unwrap()
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let provider = create_test_provider("http://test.local/3/");
        assert_eq!(provider.api_url, "http://test.local/3");
    }

    #[test]
    fn test_provider_name() {
        let provider = create_test_provider("http://test.local");
        assert_eq!(provider.name(), "tmdb");
    }

    #[tokio::test]
    async fn test_empty_imdb_id_rejected() {
        let provider = create_test_provider("http://test.local");
        let result = provider.find_by_imdb_id(" ", MediaKind::Movie).await;
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }
}
