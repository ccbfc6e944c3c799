use serde::Serialize;

use super::MediaKind;

/// A pseudo-stream pointing at a recommended title's TMDb page
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StreamRecord {
    /// Short badge, e.g. `⭐ 8.4 • 2010`
    pub name: String,
    pub title: String,
    pub external_url: String,
    pub thumbnail: Option<String>,
    pub behavior_hints: BehaviorHints,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BehaviorHints {
    /// Same value on every record of a response, so the client treats them as one set
    pub binge_group: String,
}

/// Body of `GET /stream/{kind}/{id}.json`
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct StreamsResponse {
    pub streams: Vec<StreamRecord>,
}

impl StreamsResponse {
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Add-on manifest served at `/manifest.json`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub id: &'static str,
    pub version: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub resources: Vec<&'static str>,
    pub types: Vec<MediaKind>,
    pub id_prefixes: Vec<&'static str>,
    pub catalogs: Vec<serde_json::Value>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            id: "community.tmdb-similar-streams",
            version: env!("CARGO_PKG_VERSION"),
            name: "TMDb Similar",
            description: "Similar and recommended titles from TMDb, ranked by popularity and rating",
            resources: vec!["stream"],
            types: vec![MediaKind::Movie, MediaKind::Series],
            id_prefixes: vec!["tt"],
            catalogs: Vec::new(),
        }
    }
}
