use crate::models::MatchResult;
use crate::services::diversity::{DiversityConfig, DiversityReranker};
use crate::services::scoring;

/// Number of matches shown when the caller does not ask for a specific count
pub const DEFAULT_MATCH_COUNT: usize = 3;

/// Entry point for turning liked artists into group recommendations
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    reranker: DiversityReranker,
}

impl Matcher {
    pub fn new(config: DiversityConfig) -> Self {
        Self {
            reranker: DiversityReranker::new(config),
        }
    }

    pub fn diversity(&self) -> &DiversityConfig {
        self.reranker.config()
    }

    /// Full ranking of every group, best match first
    pub fn calculate_matches<S: AsRef<str>>(&self, liked_artists: &[S]) -> Vec<MatchResult> {
        scoring::calculate_matches(liked_artists)
    }

    /// The best `count` matches, with diversity re-ranking applied
    pub fn top_matches<S: AsRef<str>>(&self, liked_artists: &[S], count: usize) -> Vec<MatchResult> {
        let ranked = scoring::calculate_matches(liked_artists);
        self.reranker.rerank(liked_artists, ranked, count)
    }

    /// The single best group, or `None` when nothing was liked
    pub fn top_match<S: AsRef<str>>(&self, liked_artists: &[S]) -> Option<String> {
        if liked_artists.is_empty() {
            return None;
        }

        self.top_matches(liked_artists, 1)
            .into_iter()
            .next()
            .map(|result| result.group_id)
    }
}
