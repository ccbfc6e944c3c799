use crate::models::{BehaviorHints, MediaKind, RankedCandidate, StreamRecord};

/// Shared by every record of a response
pub const BINGE_GROUP: &str = "tmdb-similar-recommendations";

const TMDB_WEB_URL: &str = "https://www.themoviedb.org";
const TMDB_IMAGE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// Maps ranked candidates to stream records, preserving order
pub fn to_stream_records(ranked: &[RankedCandidate], kind: MediaKind) -> Vec<StreamRecord> {
    ranked
        .iter()
        .map(|r| to_stream_record(r, kind))
        .collect()
}

pub fn to_stream_record(ranked: &RankedCandidate, kind: MediaKind) -> StreamRecord {
    let candidate = &ranked.candidate;

    StreamRecord {
        name: badge(candidate.vote_average, candidate.date()),
        title: candidate.display_title().unwrap_or("Unknown").to_string(),
        external_url: format!("{}/{}/{}", TMDB_WEB_URL, kind.tmdb_path(), candidate.id),
        thumbnail: candidate
            .backdrop_path
            .as_deref()
            .or(candidate.poster_path.as_deref())
            .map(|path| format!("{}{}", TMDB_IMAGE_URL, path)),
        behavior_hints: BehaviorHints {
            binge_group: BINGE_GROUP.to_string(),
        },
    }
}

/// `⭐ 7.5 • 1999`, with `?` for an unknown rating and `N/A` for an unknown year
fn badge(vote_average: Option<f64>, date: Option<&str>) -> String {
    let rating = vote_average
        .filter(|v| *v > 0.0)
        // half away from zero, so 8.25 and 8.75 round the same way
        .map(|v| format!("{:.1}", (v * 10.0).round() / 10.0))
        .unwrap_or_else(|| "?".to_string());
    let year = date
        .and_then(release_year)
        .map(|y| format!("{:04}", y))
        .unwrap_or_else(|| "N/A".to_string());

    format!("⭐ {} • {}", rating, year)
}

/// Leading four digits of `1999-03-30`, `1999-03` or `1999`
fn release_year(date: &str) -> Option<i32> {
    let year = date.get(..4)?;
    if !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    year.parse().ok()
}
