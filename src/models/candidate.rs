use serde::Deserialize;

use super::MediaKind;

/// One title returned by the TMDb similar/recommendations endpoints.
///
/// Movies carry `title`/`release_date`, series carry `name`/`first_air_date`.
/// Every numeric field is optional since TMDb omits them for obscure titles.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Candidate {
    pub id: u64,
    pub title: Option<String>,
    pub name: Option<String>,
    pub popularity: Option<f64>,
    pub vote_average: Option<f64>,
    pub vote_count: Option<u64>,
    pub release_date: Option<String>,
    pub first_air_date: Option<String>,
    pub backdrop_path: Option<String>,
    pub poster_path: Option<String>,
}

impl Candidate {
    pub fn display_title(&self) -> Option<&str> {
        self.title.as_deref().or(self.name.as_deref())
    }

    pub fn date(&self) -> Option<&str> {
        self.release_date
            .as_deref()
            .or(self.first_air_date.as_deref())
    }

    pub fn votes(&self) -> u64 {
        self.vote_count.unwrap_or(0)
    }
}

/// The title a request is about, as returned by `GET /{movie|tv}/{id}`
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SourceItem {
    pub id: u64,
    pub title: Option<String>,
    pub name: Option<String>,
    pub popularity: Option<f64>,
}

/// A candidate that survived filtering, with its relevance score (0-100)
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCandidate {
    pub candidate: Candidate,
    pub relevance_score: f64,
}

/// First page of a paginated candidate list
#[derive(Debug, Deserialize)]
pub struct CandidatePage {
    #[serde(default)]
    pub results: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct FindResult {
    pub id: u64,
}

/// Response of `GET /find/{external_id}`
#[derive(Debug, Default, Deserialize)]
pub struct FindResponse {
    #[serde(default)]
    pub movie_results: Vec<FindResult>,
    #[serde(default)]
    pub tv_results: Vec<FindResult>,
}

impl FindResponse {
    /// TMDb id of the first match for the given kind
    pub fn first_id(&self, kind: MediaKind) -> Option<u64> {
        let results = match kind {
            MediaKind::Movie => &self.movie_results,
            MediaKind::Series => &self.tv_results,
        };
        results.first().map(|r| r.id)
    }
}
