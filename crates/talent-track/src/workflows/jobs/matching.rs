//! Skill-overlap ranking for job recommendations.
//!
//! Pure and deterministic: tokens are trimmed, lower-cased, and compared by
//! exact equality (no substring or fuzzy matching). Ties in overlap count
//! fall back to recency.

use std::collections::HashSet;

use super::domain::Job;

/// Maximum number of recommendations returned to a seeker.
pub const RECOMMENDATION_LIMIT: usize = 5;

/// Overlap count at which a recommendation counts as a perfect match.
pub const PERFECT_MATCH_THRESHOLD: usize = 2;

/// Normalize a raw skill list into a comparable token set.
pub fn token_set(raw: &[String]) -> HashSet<String> {
    raw.iter()
        .map(|token| token.trim().to_lowercase())
        .filter(|token| !token.is_empty())
        .collect()
}

#[derive(Debug, Clone)]
pub struct RankedJob {
    pub job: Job,
    pub match_count: usize,
}

impl RankedJob {
    pub fn is_perfect_match(&self) -> bool {
        self.match_count >= PERFECT_MATCH_THRESHOLD
    }
}

/// Rank candidate jobs by how many of their skill tokens the seeker holds,
/// tie-broken by creation time descending, truncated to
/// [`RECOMMENDATION_LIMIT`].
pub fn rank_by_overlap(wanted: &HashSet<String>, candidates: Vec<Job>) -> Vec<RankedJob> {
    let mut ranked: Vec<RankedJob> = candidates
        .into_iter()
        .map(|job| {
            let match_count = job
                .skills
                .iter()
                .map(|token| token.trim().to_lowercase())
                .filter(|token| !token.is_empty() && wanted.contains(token))
                .count();
            RankedJob { job, match_count }
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.match_count
            .cmp(&a.match_count)
            .then(b.job.created_at.cmp(&a.job.created_at))
    });
    ranked.truncate(RECOMMENDATION_LIMIT);
    ranked
}
