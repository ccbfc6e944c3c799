/// Metadata provider abstraction
///
/// The recommendation pipeline only needs four read operations from a
/// metadata source. Keeping them behind a trait lets handlers be tested
/// without the network and leaves room for providers other than TMDb.
use crate::{
    error::AppResult,
    models::{Candidate, MediaKind, SourceItem},
};

pub mod tmdb;

pub use tmdb::TmdbProvider;

/// Trait for metadata providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Resolve an IMDb id to the provider's internal id
    ///
    /// `Ok(None)` means the provider has no such title, which is not an error.
    async fn find_by_imdb_id(&self, imdb_id: &str, kind: MediaKind) -> AppResult<Option<u64>>;

    /// Fetch the item a request is about
    async fn fetch_details(&self, id: u64, kind: MediaKind) -> AppResult<SourceItem>;

    /// First page of titles similar to `id`
    async fn fetch_similar(&self, id: u64, kind: MediaKind) -> AppResult<Vec<Candidate>>;

    /// First page of titles recommended for `id`
    async fn fetch_recommendations(&self, id: u64, kind: MediaKind) -> AppResult<Vec<Candidate>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
