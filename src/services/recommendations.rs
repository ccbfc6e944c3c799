use crate::{
    error::AppResult,
    models::{Candidate, MediaKind, StreamRecord},
    services::{
        providers::MetadataProvider,
        ranking::{rank_candidates, RankingConfig},
        streams::to_stream_records,
    },
};

/// Result of one candidate fetch.
///
/// Keeps "the provider failed" apart from "the provider had nothing", even
/// though both contribute no candidates to the ranking.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Fetched(Vec<Candidate>),
    Failed { reason: String },
}

impl FetchOutcome {
    fn from_result(operation: &str, tmdb_id: u64, result: AppResult<Vec<Candidate>>) -> Self {
        match result {
            Ok(candidates) => FetchOutcome::Fetched(candidates),
            Err(e) => {
                tracing::error!(
                    operation,
                    tmdb_id,
                    error = %e,
                    details = ?e,
                    "Candidate fetch failed, continuing without it"
                );
                FetchOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            FetchOutcome::Fetched(_) => None,
            FetchOutcome::Failed { reason } => Some(reason),
        }
    }

    pub fn into_candidates(self) -> Vec<Candidate> {
        match self {
            FetchOutcome::Fetched(candidates) => candidates,
            FetchOutcome::Failed { .. } => Vec::new(),
        }
    }
}

/// Builds the ranked stream list for one title.
///
/// Never fails: an unknown title, a failed lookup or failed details call all
/// produce an empty list, and a failed candidate list is treated as empty.
pub async fn get_recommendations(
    provider: &dyn MetadataProvider,
    kind: MediaKind,
    imdb_id: &str,
    config: &RankingConfig,
) -> Vec<StreamRecord> {
    let tmdb_id = match provider.find_by_imdb_id(imdb_id, kind).await {
        Ok(Some(id)) => id,
        Ok(None) => {
            tracing::warn!(
                imdb_id = %imdb_id,
                kind = %kind,
                provider = provider.name(),
                "No provider id found for title"
            );
            return Vec::new();
        }
        Err(e) => {
            tracing::error!(
                operation = "find",
                imdb_id = %imdb_id,
                kind = %kind,
                error = %e,
                details = ?e,
                "Failed to resolve provider id"
            );
            return Vec::new();
        }
    };

    let (details, similar, recommended) = tokio::join!(
        provider.fetch_details(tmdb_id, kind),
        provider.fetch_similar(tmdb_id, kind),
        provider.fetch_recommendations(tmdb_id, kind),
    );

    let source = match details {
        Ok(source) => source,
        Err(e) => {
            tracing::error!(
                operation = "details",
                tmdb_id,
                kind = %kind,
                error = %e,
                details = ?e,
                "Failed to fetch source item"
            );
            return Vec::new();
        }
    };

    let similar = FetchOutcome::from_result("similar", tmdb_id, similar);
    let recommended = FetchOutcome::from_result("recommendations", tmdb_id, recommended);

    if let (Some(similar_reason), Some(recommendations_reason)) =
        (similar.failure_reason(), recommended.failure_reason())
    {
        tracing::warn!(
            tmdb_id,
            similar_reason,
            recommendations_reason,
            "Both candidate fetches failed, returning no streams"
        );
    }

    let ranked = rank_candidates(
        similar.into_candidates(),
        recommended.into_candidates(),
        &source,
        config,
    );

    tracing::info!(
        imdb_id = %imdb_id,
        tmdb_id,
        kind = %kind,
        source_popularity = source.popularity,
        results = ranked.len(),
        "Recommendations ranked"
    );

    to_stream_records(&ranked, kind)
}
