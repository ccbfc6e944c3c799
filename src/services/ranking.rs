use std::collections::HashSet;

use crate::models::{Candidate, RankedCandidate, SourceItem};

/// Weight of each score component; the score ranges over 0..=100
const COMPONENT_WEIGHT: f64 = 50.0;
const MAX_VOTE_AVERAGE: f64 = 10.0;

/// Thresholds applied while ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankingConfig {
    /// Candidates with fewer votes are dropped
    pub min_vote_count: u64,
    /// Output is truncated to this many items
    pub max_results: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            min_vote_count: 50,
            max_results: 30,
        }
    }
}

/// Relevance of `candidate` to `source`, in `0.0..=100.0`.
///
/// Popularity is normalized against the source item and capped at the
/// baseline; rating is normalized on TMDb's absolute 0-10 scale. Without a
/// positive popularity on both sides the score is 0.
pub fn score(candidate: &Candidate, source: &SourceItem) -> f64 {
    let (popularity, baseline) = match (candidate.popularity, source.popularity) {
        (Some(p), Some(b)) if p > 0.0 && b > 0.0 => (p, b),
        _ => return 0.0,
    };

    let popularity_score = (popularity / baseline).min(1.0) * COMPONENT_WEIGHT;
    let rating = candidate
        .vote_average
        .unwrap_or(0.0)
        .clamp(0.0, MAX_VOTE_AVERAGE);
    let rating_score = rating / MAX_VOTE_AVERAGE * COMPONENT_WEIGHT;

    popularity_score + rating_score
}

/// Merges both candidate lists and returns the top entries, best first.
///
/// `similar` is placed before `recommended`, so when an id appears in both
/// the similar copy is kept, and among equal scores similar titles come
/// first.
pub fn rank_candidates(
    similar: Vec<Candidate>,
    recommended: Vec<Candidate>,
    source: &SourceItem,
    config: &RankingConfig,
) -> Vec<RankedCandidate> {
    let mut seen = HashSet::new();

    let mut ranked: Vec<RankedCandidate> = similar
        .into_iter()
        .chain(recommended)
        .filter(|candidate| seen.insert(candidate.id))
        .filter(|candidate| candidate.votes() >= config.min_vote_count)
        .map(|candidate| RankedCandidate {
            relevance_score: score(&candidate, source),
            candidate,
        })
        .collect();

    // sort_by is stable: ties keep merge order
    ranked.sort_by(|a, b| b.relevance_score.total_cmp(&a.relevance_score));
    ranked.truncate(config.max_results);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: u64, popularity: f64, vote_average: f64, vote_count: u64) -> Candidate {
        Candidate {
            id,
            title: Some(format!("Title {}", id)),
            popularity: Some(popularity),
            vote_average: Some(vote_average),
            vote_count: Some(vote_count),
            ..Default::default()
        }
    }

    fn source(popularity: f64) -> SourceItem {
        SourceItem {
            id: 999,
            popularity: Some(popularity),
            ..Default::default()
        }
    }

    fn ids(ranked: &[RankedCandidate]) -> Vec<u64> {
        ranked.iter().map(|r| r.candidate.id).collect()
    }

    #[test]
    fn test_score_combines_both_components() {
        // half as popular as the source: 25, rating 8/10: 40
        let score = score(&candidate(1, 5.0, 8.0, 100), &source(10.0));
        assert!((score - 65.0).abs() < 1e-9);
    }

    #[test]
    fn test_score_caps_popularity_at_baseline() {
        let at_baseline = score(&candidate(1, 10.0, 5.0, 100), &source(10.0));
        let above_baseline = score(&candidate(1, 1000.0, 5.0, 100), &source(10.0));
        assert_eq!(at_baseline, above_baseline);
        assert!((at_baseline - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_score_is_zero_without_positive_popularity() {
        assert_eq!(score(&candidate(1, 0.0, 9.0, 100), &source(10.0)), 0.0);
        assert_eq!(score(&candidate(1, -3.0, 9.0, 100), &source(10.0)), 0.0);
        assert_eq!(score(&candidate(1, 5.0, 9.0, 100), &source(0.0)), 0.0);
        assert_eq!(score(&candidate(1, 5.0, 9.0, 100), &source(-1.0)), 0.0);

        let mut missing = candidate(1, 5.0, 9.0, 100);
        missing.popularity = None;
        assert_eq!(score(&missing, &source(10.0)), 0.0);
        assert_eq!(score(&candidate(1, 5.0, 9.0, 100), &SourceItem::default()), 0.0);
    }

    #[test]
    fn test_score_treats_missing_rating_as_zero() {
        let mut unrated = candidate(1, 10.0, 0.0, 100);
        unrated.vote_average = None;
        assert!((score(&unrated, &source(10.0)) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_score_stays_within_bounds() {
        let src = source(7.5);
        for popularity in [0.001, 0.5, 7.5, 50.0, 1e9] {
            for rating in [-2.0, 0.0, 3.3, 10.0, 14.0] {
                let s = score(&candidate(1, popularity, rating, 100), &src);
                assert!((0.0..=100.0).contains(&s), "score {} out of range", s);
            }
        }
    }

    #[test]
    fn test_score_is_monotonic() {
        let src = source(20.0);
        let mut previous = 0.0;
        for popularity in [1.0, 5.0, 10.0, 20.0, 40.0] {
            let s = score(&candidate(1, popularity, 6.0, 100), &src);
            assert!(s >= previous);
            previous = s;
        }

        let mut previous = 0.0;
        for rating in [0.0, 2.5, 5.0, 7.5, 10.0] {
            let s = score(&candidate(1, 5.0, rating, 100), &src);
            assert!(s >= previous);
            previous = s;
        }
    }

    #[test]
    fn test_duplicate_keeps_similar_copy() {
        let similar = vec![candidate(1, 10.0, 8.0, 100)];
        let recommended = vec![candidate(1, 1.0, 1.0, 100), candidate(2, 10.0, 8.0, 10)];

        let ranked = rank_candidates(similar, recommended, &source(10.0), &RankingConfig::default());

        assert_eq!(ids(&ranked), vec![1]);
        assert_eq!(ranked[0].candidate.vote_average, Some(8.0));
        assert!((ranked[0].relevance_score - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_filters_low_vote_counts_regardless_of_score() {
        let similar = vec![candidate(1, 100.0, 10.0, 49), candidate(2, 1.0, 1.0, 50)];

        let ranked = rank_candidates(similar, vec![], &source(10.0), &RankingConfig::default());

        assert_eq!(ids(&ranked), vec![2]);
    }

    #[test]
    fn test_missing_vote_count_is_filtered() {
        let mut unvoted = candidate(1, 10.0, 8.0, 0);
        unvoted.vote_count = None;

        let ranked = rank_candidates(vec![unvoted], vec![], &source(10.0), &RankingConfig::default());

        assert!(ranked.is_empty());
    }

    #[test]
    fn test_sorted_descending_by_score() {
        let similar = vec![candidate(1, 1.0, 5.0, 100), candidate(2, 10.0, 9.0, 100)];
        let recommended = vec![candidate(3, 5.0, 7.0, 100)];

        let ranked = rank_candidates(similar, recommended, &source(10.0), &RankingConfig::default());

        assert_eq!(ids(&ranked), vec![2, 3, 1]);
        assert!(ranked
            .windows(2)
            .all(|w| w[0].relevance_score >= w[1].relevance_score));
    }

    #[test]
    fn test_truncates_to_max_results() {
        let similar: Vec<Candidate> = (1..=10).map(|id| candidate(id, id as f64, 5.0, 100)).collect();
        let config = RankingConfig {
            min_vote_count: 0,
            max_results: 3,
        };

        let ranked = rank_candidates(similar, vec![], &source(10.0), &config);

        assert_eq!(ids(&ranked), vec![10, 9, 8]);
    }

    #[test]
    fn test_zero_source_popularity_keeps_merge_order() {
        let similar = vec![candidate(3, 50.0, 9.0, 100), candidate(1, 5.0, 2.0, 100)];
        let recommended = vec![candidate(2, 80.0, 7.0, 100)];

        let ranked = rank_candidates(similar, recommended, &source(0.0), &RankingConfig::default());

        assert_eq!(ids(&ranked), vec![3, 1, 2]);
        assert!(ranked.iter().all(|r| r.relevance_score == 0.0));
    }

    #[test]
    fn test_ranking_is_deterministic() {
        let build = || {
            (
                vec![candidate(1, 3.0, 7.0, 60), candidate(2, 3.0, 7.0, 60)],
                vec![candidate(3, 9.0, 4.0, 500), candidate(1, 9.0, 9.0, 500)],
            )
        };
        let (s1, r1) = build();
        let (s2, r2) = build();

        let first = rank_candidates(s1, r1, &source(6.0), &RankingConfig::default());
        let second = rank_candidates(s2, r2, &source(6.0), &RankingConfig::default());

        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_inputs() {
        let ranked = rank_candidates(vec![], vec![], &source(10.0), &RankingConfig::default());
        assert!(ranked.is_empty());
    }
}
