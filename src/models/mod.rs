use serde::Serialize;
use std::{fmt::Display, str::FromStr};

pub mod candidate;
pub mod stream;

pub use candidate::{Candidate, CandidatePage, FindResponse, RankedCandidate, SourceItem};
pub use stream::{BehaviorHints, Manifest, StreamRecord, StreamsResponse};

/// Kind of media the add-on client asks about
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Series,
}

impl MediaKind {
    /// Path segment TMDb uses for this kind (`/movie/...`, `/tv/...`)
    pub fn tmdb_path(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Series => "tv",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Series => "series",
        }
    }
}

impl Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MediaKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "movie" => Ok(MediaKind::Movie),
            "series" => Ok(MediaKind::Series),
            other => Err(format!("unsupported media kind '{}'", other)),
        }
    }
}

/// Extracts the IMDb id from an add-on stream id.
///
/// Series ids arrive as `tt0903747:1:2`; only the part before the first colon
/// identifies the title. Returns `None` for anything not shaped like `tt...`.
pub fn parse_imdb_id(raw: &str) -> Option<&str> {
    let id = raw.split(':').next().unwrap_or_default();
    (id.len() > 2 && id.starts_with("tt")).then_some(id)
}
